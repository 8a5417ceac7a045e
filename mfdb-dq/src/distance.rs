//! Levenshtein edit distance
//!
//! Counts single-character insertions, deletions and substitutions over Unicode
//! scalar values. Comparison is case-sensitive; callers fold case first when
//! they want case-insensitive matching.

/// Edit distance between `a` and `b`
///
/// Uses one reused DP row sized by the shorter string, so memory is
/// O(min(len(a), len(b))) and time is O(len(a) * len(b)).
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

/// Edit distance over pre-split character slices
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    // row[j] = distance between long[..i] and short[..j]
    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = diagonal + usize::from(lc != sc);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("metal", "metal"), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("hello", "hallo"), 1);
        assert_eq!(levenshtein("metallica", "metalica"), 1);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(levenshtein("Nightwish", "nightwish"), 1);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein("motörhead", "motorhead"), 1);
        assert_eq!(levenshtein("ö", ""), 1);
        assert_eq!(levenshtein("mötley crüe", "motley crue"), 2);
    }

    #[test]
    fn test_symmetric_and_reflexive() {
        let words = [
            "", "a", "Sabaton", "sabbaton", "Blind Guardian", "Blind Gaurdian", "Opeth", "Ωmega",
            "The Ocean",
        ];
        for a in words {
            assert_eq!(levenshtein(a, a), 0);
            assert_eq!(levenshtein(a, ""), a.chars().count());
            for b in words {
                assert_eq!(levenshtein(a, b), levenshtein(b, a), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_matches_strsim() {
        let words = [
            "", "kitten", "sitting", "Amon Amarth", "amon amarth", "Amorphis", "Arch Enemy",
            "Arch Enemies", "Épica", "Epica",
        ];
        for a in words {
            for b in words {
                assert_eq!(levenshtein(a, b), strsim::levenshtein(a, b), "{:?} vs {:?}", a, b);
            }
        }
    }
}
