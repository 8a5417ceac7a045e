//! Capitalization rules for band names, genres and member roles
//!
//! Band names and genres share one per-word rule: the first alphabetic
//! character of every word must be uppercase. Words made only of digits or
//! without any letter are ignored. Band names additionally allow lowercase
//! exception words ("of", "the", ...) after the first word. Roles only need
//! their first word capitalized.

use crate::normalize::{
    capitalize_first_alphabetic, first_alphabetic, is_exception_word, is_lowercase_word,
    is_numeric_word,
};
use crate::report::{CapitalizationIssue, CheckKind, CheckOutcome, Finding, LabelField, Location};
use mfdb_common::Dataset;
use tracing::debug;

/// Whether `word`, at position `index`, may be left as is
fn is_exempt(word: &str, index: usize, allow_exceptions: bool) -> bool {
    if is_numeric_word(word) {
        return true;
    }
    allow_exceptions && index > 0 && is_exception_word(word) && is_lowercase_word(word)
}

/// Check the per-word title-case rule
///
/// Empty or whitespace-only text has no words and passes.
pub fn is_capitalized_per_word(text: &str, allow_exceptions: bool) -> bool {
    text.split_whitespace().enumerate().all(|(i, word)| {
        if is_exempt(word, i, allow_exceptions) {
            return true;
        }
        first_alphabetic(word).map_or(true, char::is_uppercase)
    })
}

/// Check that the first word of a role starts with an uppercase letter
///
/// An empty role fails. A first word without letters passes.
pub fn is_role_capitalized(role: &str) -> bool {
    if role.is_empty() {
        return false;
    }
    let first_word = role.split_whitespace().next().unwrap_or(role);
    first_alphabetic(first_word).map_or(true, char::is_uppercase)
}

/// Correct `text` so it passes [`is_capitalized_per_word`]
///
/// Words are re-joined with single spaces. Only the first letter of each word
/// changes, so acronyms and stylized names keep their inner casing.
pub fn suggest_title_case(text: &str, allow_exceptions: bool) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if is_exempt(word, i, allow_exceptions) {
                word.to_string()
            } else {
                capitalize_first_alphabetic(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Correct a role so it passes [`is_role_capitalized`]; `None` for an empty role
pub fn suggest_role(role: &str) -> Option<String> {
    if role.trim().is_empty() {
        return None;
    }
    let leading = role.len() - role.trim_start().len();
    let (indent, rest) = role.split_at(leading);
    let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let (first_word, tail) = rest.split_at(word_end);
    Some(format!("{}{}{}", indent, capitalize_first_alphabetic(first_word), tail))
}

fn band_name_issue(location: Location, name: &str) -> Option<Finding> {
    if is_capitalized_per_word(name, true) {
        return None;
    }
    Some(Finding::Capitalization(CapitalizationIssue {
        location,
        field: LabelField::BandName,
        value: name.to_string(),
        suggestion: Some(suggest_title_case(name, true)),
    }))
}

/// Band names in festival lineups, then in the bands collection
pub fn check_band_names(dataset: &Dataset) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::BandNames);

    for festival in &dataset.festivals {
        for entry in &festival.bands {
            outcome.checked += 1;
            let location = Location::FestivalLineup {
                festival: festival.name.clone(),
            };
            outcome.findings.extend(band_name_issue(location, entry.name()));
        }
    }
    let lineup_errors = outcome.findings.len();
    debug!(
        "Band names in festivals: {} checked, {} not capitalized",
        outcome.checked, lineup_errors
    );

    for band in &dataset.bands {
        outcome.checked += 1;
        let location = Location::Band {
            band: band.name.clone(),
        };
        outcome.findings.extend(band_name_issue(location, &band.name));
    }
    debug!(
        "Band names in bands section: {} checked, {} not capitalized",
        dataset.bands.len(),
        outcome.findings.len() - lineup_errors
    );

    outcome
}

/// Genre labels; every word must be capitalized, no exceptions
pub fn check_genres(dataset: &Dataset) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::Genres);

    for band in &dataset.bands {
        for genre in &band.genres {
            outcome.checked += 1;
            if is_capitalized_per_word(genre, false) {
                continue;
            }
            outcome.findings.push(Finding::Capitalization(CapitalizationIssue {
                location: Location::Band {
                    band: band.name.clone(),
                },
                field: LabelField::Genre,
                value: genre.clone(),
                suggestion: Some(suggest_title_case(genre, false)),
            }));
        }
    }

    outcome
}

/// Member roles; only the first word is checked and empty roles fail
pub fn check_member_roles(dataset: &Dataset) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::MemberRoles);

    for band in &dataset.bands {
        for member in &band.members {
            outcome.checked += 1;
            if is_role_capitalized(&member.role) {
                continue;
            }
            outcome.findings.push(Finding::Capitalization(CapitalizationIssue {
                location: Location::Member {
                    band: band.name.clone(),
                    member: member.name.clone(),
                },
                field: LabelField::Role,
                value: member.role.clone(),
                suggestion: suggest_role(&member.role),
            }));
        }
    }

    outcome
}
