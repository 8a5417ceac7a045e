//! Automatic correction of capitalization and key issues
//!
//! Produces a corrected copy of the dataset; the input is left untouched and
//! saving is up to the caller. Possible duplicates are never changed.

use crate::capitalization::{
    is_capitalized_per_word, is_role_capitalized, suggest_role, suggest_title_case,
};
use crate::normalize::generate_band_key;
use mfdb_common::{Dataset, LineupEntry};
use tracing::debug;

pub struct FixOutcome {
    pub dataset: Dataset,
    /// Number of values changed
    pub fixed: usize,
}

fn fix_title(value: &mut String, allow_exceptions: bool, fixed: &mut usize) {
    if is_capitalized_per_word(value, allow_exceptions) {
        return;
    }
    let corrected = suggest_title_case(value, allow_exceptions);
    debug!("Fixing '{}' -> '{}'", value, corrected);
    *value = corrected;
    *fixed += 1;
}

fn fix_key(key: &mut Option<String>, name: &str, fixed: &mut usize) {
    let Some(current) = key.as_mut() else {
        return;
    };
    let expected = generate_band_key(name);
    if *current != expected {
        debug!("Fixing key '{}' -> '{}'", current, expected);
        *current = expected;
        *fixed += 1;
    }
}

/// Apply every available correction. Names are fixed before keys so keys are
/// generated from the corrected names.
pub fn apply_fixes(dataset: &Dataset) -> FixOutcome {
    let mut dataset = dataset.clone();
    let mut fixed = 0;

    for festival in &mut dataset.festivals {
        for entry in &mut festival.bands {
            match entry {
                LineupEntry::Name(name) => fix_title(name, true, &mut fixed),
                LineupEntry::Ref(band_ref) => {
                    fix_title(&mut band_ref.name, true, &mut fixed);
                    fix_key(&mut band_ref.key, &band_ref.name, &mut fixed);
                }
            }
        }
    }

    for band in &mut dataset.bands {
        fix_title(&mut band.name, true, &mut fixed);
        fix_key(&mut band.key, &band.name, &mut fixed);

        for genre in &mut band.genres {
            fix_title(genre, false, &mut fixed);
        }

        for member in &mut band.members {
            if is_role_capitalized(&member.role) {
                continue;
            }
            if let Some(role) = suggest_role(&member.role) {
                debug!("Fixing role '{}' -> '{}'", member.role, role);
                member.role = role;
                fixed += 1;
            }
        }
    }

    FixOutcome { dataset, fixed }
}
