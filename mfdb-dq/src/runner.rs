//! Runs every check in a fixed order and aggregates the results
//!
//! Order: band names (festivals, then bands), genres, member roles, band
//! keys, duplicates. Checks never short-circuit each other; a dataset that
//! loaded is always checked completely.

use crate::capitalization::{check_band_names, check_genres, check_member_roles};
use crate::duplicates::DuplicateDetector;
use crate::keys::check_band_keys;
use crate::report::{CheckOutcome, ValidationReport};
use mfdb_common::db::load_dataset;
use mfdb_common::Dataset;
use std::path::Path;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationOptions {
    pub duplicates: DuplicateDetector,
}

/// Run all checks against a loaded dataset
pub fn run_checks(dataset: &Dataset, options: &ValidationOptions) -> ValidationReport {
    let start = Instant::now();
    let mut report = ValidationReport::new(
        dataset.festivals.len(),
        dataset.bands.len(),
        options.duplicates.threshold,
    );

    let outcomes: [CheckOutcome; 5] = [
        check_band_names(dataset),
        check_genres(dataset),
        check_member_roles(dataset),
        check_band_keys(dataset),
        options.duplicates.detect(dataset),
    ];

    for outcome in outcomes {
        info!(
            "{}: {} checked, {} error(s), {} warning(s)",
            outcome.check.title(),
            outcome.checked,
            outcome.errors(),
            outcome.warnings()
        );
        report.push(outcome);
    }

    info!(
        "Validation finished in {:.1?}: {} error(s), {} warning(s)",
        start.elapsed(),
        report.errors,
        report.warnings
    );
    report
}

/// Load `path` and run all checks
///
/// A load failure is returned before any check runs; no partial report exists.
pub fn validate_file(path: &Path, options: &ValidationOptions) -> mfdb_common::Result<ValidationReport> {
    let dataset = load_dataset(path)?;
    Ok(run_checks(&dataset, options))
}
