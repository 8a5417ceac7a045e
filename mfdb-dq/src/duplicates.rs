//! Near-duplicate band name detection
//!
//! Every band name in festival lineups and in the bands collection goes into
//! one occurrence pool. Pairs of pool entries are compared by edit distance on
//! their folded (lowercased) forms and reported as warnings when the distance
//! is at or below the threshold. This is a heuristic: nothing is merged.
//!
//! The scan is quadratic in the pool size and is meant for datasets with
//! hundreds of entries, not thousands.

use crate::distance::levenshtein_chars;
use crate::normalize::{clean_band_name, fold_case, normalize};
use crate::report::{or_unknown, CheckKind, CheckOutcome, Finding};
use mfdb_common::Dataset;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Source label for names coming from the bands collection
pub const BANDS_SECTION: &str = "Bands section";

/// How names are folded before they are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameFolding {
    /// Lowercase only
    #[default]
    Case,
    /// Lowercase and collapse whitespace
    Whitespace,
    /// Collapse whitespace, strip a leading "the "/"The ", then lowercase
    Article,
}

impl NameFolding {
    pub fn apply(&self, name: &str) -> String {
        match self {
            NameFolding::Case => fold_case(name),
            NameFolding::Whitespace => normalize(name),
            NameFolding::Article => fold_case(&clean_band_name(name)),
        }
    }
}

impl FromStr for NameFolding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "case" => Ok(NameFolding::Case),
            "whitespace" => Ok(NameFolding::Whitespace),
            "article" => Ok(NameFolding::Article),
            other => Err(format!(
                "unknown name folding '{}' (expected case, whitespace or article)",
                other
            )),
        }
    }
}

impl fmt::Display for NameFolding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NameFolding::Case => "case",
            NameFolding::Whitespace => "whitespace",
            NameFolding::Article => "article",
        };
        f.write_str(name)
    }
}

/// One appearance of a band name and where it was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameOccurrence {
    pub name: String,
    /// "Festival: <festival name>" or "Bands section"
    pub source: String,
}

impl NameOccurrence {
    pub fn new(name: &str, source: &str) -> Self {
        Self {
            name: name.to_string(),
            source: source.to_string(),
        }
    }
}

/// Two occurrences whose names are suspiciously close
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicatePair {
    pub first: NameOccurrence,
    pub second: NameOccurrence,
    /// Edit distance between the folded names
    pub distance: usize,
    /// Normalized Levenshtein similarity of the folded names (1.0 = identical)
    pub similarity: f64,
}

/// Build the occurrence pool: lineup names first, then the bands collection
///
/// Repeated names are kept; every appearance is one entry.
pub fn occurrence_pool(dataset: &Dataset) -> Vec<NameOccurrence> {
    let mut pool = Vec::with_capacity(dataset.lineup_len() + dataset.bands.len());

    for festival in &dataset.festivals {
        let source = format!("Festival: {}", or_unknown(&festival.name));
        for entry in &festival.bands {
            pool.push(NameOccurrence::new(entry.name(), &source));
        }
    }

    for band in &dataset.bands {
        pool.push(NameOccurrence::new(&band.name, BANDS_SECTION));
    }

    pool
}

/// Folded names interned to small integer ids
struct FoldedNames {
    /// Folded id of each pool entry
    ids: Vec<u32>,
    /// Characters of each distinct folded name, indexed by id
    chars: Vec<Vec<char>>,
}

impl FoldedNames {
    fn build(pool: &[NameOccurrence], folding: NameFolding) -> Self {
        let mut index: HashMap<String, u32> = HashMap::new();
        let mut chars: Vec<Vec<char>> = Vec::new();
        let ids: Vec<u32> = pool
            .iter()
            .map(|occurrence| {
                let folded = folding.apply(&occurrence.name);
                *index.entry(folded).or_insert_with_key(|key| {
                    chars.push(key.chars().collect());
                    (chars.len() - 1) as u32
                })
            })
            .collect();
        Self { ids, chars }
    }

    fn text(&self, id: u32) -> String {
        self.chars[id as usize].iter().collect()
    }
}

/// Duplicate detector configuration
#[derive(Debug, Clone, Copy)]
pub struct DuplicateDetector {
    /// Maximum edit distance reported as a possible duplicate
    pub threshold: usize,
    pub folding: NameFolding,
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self {
            threshold: mfdb_common::config::DEFAULT_DUPLICATE_THRESHOLD,
            folding: NameFolding::default(),
        }
    }
}

impl DuplicateDetector {
    pub fn new(threshold: usize, folding: NameFolding) -> Self {
        Self { threshold, folding }
    }

    /// Pool index pairs that need a distance computation
    ///
    /// Walks i < j in pool order. The first pair to produce a given unordered
    /// folded-name pair claims it; later pairs with the same folded names are
    /// dropped even if the claiming pair was itself skipped because its raw
    /// names are identical.
    fn candidate_pairs(&self, pool: &[NameOccurrence], folded: &FoldedNames) -> Vec<(usize, usize)> {
        let mut evaluated: HashSet<(u32, u32)> = HashSet::new();
        let mut candidates = Vec::new();

        for i in 0..pool.len() {
            for j in (i + 1)..pool.len() {
                let (a, b) = (folded.ids[i], folded.ids[j]);
                let key = if a <= b { (a, b) } else { (b, a) };
                if !evaluated.insert(key) {
                    continue;
                }
                if pool[i].name == pool[j].name {
                    continue;
                }
                candidates.push((i, j));
            }
        }

        candidates
    }

    /// Find possible duplicates in the dataset
    pub fn detect(&self, dataset: &Dataset) -> CheckOutcome {
        let pool = occurrence_pool(dataset);
        self.detect_in_pool(&pool)
    }

    /// Find possible duplicates in an already-built occurrence pool
    pub fn detect_in_pool(&self, pool: &[NameOccurrence]) -> CheckOutcome {
        let mut outcome = CheckOutcome::new(CheckKind::Duplicates);
        outcome.checked = pool.len();

        let folded = FoldedNames::build(pool, self.folding);
        let candidates = self.candidate_pairs(pool, &folded);
        debug!(
            "Duplicate scan: {} entries, {} distinct folded names, {} candidate pairs (threshold: {}, folding: {})",
            pool.len(),
            folded.chars.len(),
            candidates.len(),
            self.threshold,
            self.folding
        );

        let mut computed = 0usize;
        for (i, j) in candidates {
            let a = &folded.chars[folded.ids[i] as usize];
            let b = &folded.chars[folded.ids[j] as usize];

            // The distance is at least the length difference
            if a.len().abs_diff(b.len()) > self.threshold {
                continue;
            }

            computed += 1;
            let distance = levenshtein_chars(a, b);
            if distance > self.threshold {
                continue;
            }

            let similarity = strsim::normalized_levenshtein(
                &folded.text(folded.ids[i]),
                &folded.text(folded.ids[j]),
            );
            outcome.findings.push(Finding::PossibleDuplicate(DuplicatePair {
                first: pool[i].clone(),
                second: pool[j].clone(),
                distance,
                similarity,
            }));
        }

        debug!(
            "Duplicate scan: {} distances computed, {} possible duplicates",
            computed,
            outcome.findings.len()
        );
        outcome
    }
}
