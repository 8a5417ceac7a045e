//! Band key compliance
//!
//! A stored key must equal the key generated from the band's name. Records
//! without a key are not checked.

use crate::normalize::generate_band_key;
use crate::report::{BandKeyIssue, CheckKind, CheckOutcome, Finding, Location};
use mfdb_common::Dataset;

fn key_issue(location: Location, name: &str, key: Option<&str>) -> Option<Finding> {
    let key = key?;
    let expected = generate_band_key(name);
    if key == expected {
        return None;
    }
    Some(Finding::BandKey(BandKeyIssue {
        location,
        name: name.to_string(),
        key: key.to_string(),
        expected,
    }))
}

/// Keys of lineup entries, then keys of the bands collection
pub fn check_band_keys(dataset: &Dataset) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::BandKeys);

    for festival in &dataset.festivals {
        for entry in &festival.bands {
            if entry.key().is_some() {
                outcome.checked += 1;
            }
            let location = Location::FestivalLineup {
                festival: festival.name.clone(),
            };
            outcome
                .findings
                .extend(key_issue(location, entry.name(), entry.key()));
        }
    }

    for band in &dataset.bands {
        if band.key.is_some() {
            outcome.checked += 1;
        }
        let location = Location::Band {
            band: band.name.clone(),
        };
        outcome
            .findings
            .extend(key_issue(location, &band.name, band.key.as_deref()));
    }

    outcome
}
