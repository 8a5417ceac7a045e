//! Text normalization shared by every check
//!
//! All functions here are pure and total: they never fail and map empty input
//! to empty output.

/// Function words allowed to stay lowercase inside a band name
pub const EXCEPTION_WORDS: [&str; 14] = [
    "of", "the", "and", "in", "a", "an", "or", "but", "for", "at", "by", "to", "from", "with",
];

/// Leading articles removed by [`clean_band_name`], tried in this order
const ARTICLE_PREFIXES: [&str; 2] = ["the ", "The "];

/// Lowercase form used for case-insensitive comparison
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Lowercase and collapse whitespace runs into single spaces
pub fn normalize(text: &str) -> String {
    collapse_whitespace(&text.to_lowercase())
}

/// Trim and collapse whitespace runs into single spaces
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse whitespace, then strip a leading "the " / "The "
///
/// Matching is case-sensitive: "THE " is kept.
pub fn clean_band_name(name: &str) -> String {
    let mut cleaned = collapse_whitespace(name);
    for prefix in ARTICLE_PREFIXES {
        if let Some(rest) = cleaned.strip_prefix(prefix) {
            cleaned = rest.to_string();
        }
    }
    cleaned
}

/// Whether `word`, compared case-insensitively, is an exception word
pub fn is_exception_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    EXCEPTION_WORDS.contains(&lower.as_str())
}

/// At least one cased character and no uppercase ones
pub fn is_lowercase_word(word: &str) -> bool {
    let mut has_cased = false;
    for c in word.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Non-empty and made only of numeric characters
pub fn is_numeric_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_numeric)
}

/// First alphabetic character of `word`, wherever it appears
pub fn first_alphabetic(word: &str) -> Option<char> {
    word.chars().find(|c| c.is_alphabetic())
}

/// Uppercase the first alphabetic character, leaving the rest untouched
///
/// "metal" becomes "Metal", "'n'" becomes "'N'", "AC/DC" is unchanged.
pub fn capitalize_first_alphabetic(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut done = false;
    for c in word.chars() {
        if !done && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            done = true;
        } else {
            out.push(c);
        }
    }
    out
}

/// URL-friendly key for a band name
///
/// Lowercase, keep only `[a-z0-9]`, whitespace and `-`, turn spaces into
/// hyphens, squeeze hyphen runs and trim hyphens from both ends.
pub fn generate_band_key(name: &str) -> String {
    let lowered = name.to_lowercase();

    let mut key = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        let c = if c == ' ' { '-' } else { c };
        let keep = c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_ascii_whitespace() || c == '-';
        if !keep || (c == '-' && key.ends_with('-')) {
            continue;
        }
        key.push(c);
    }

    key.trim_matches('-').to_string()
}
