//! End-to-end validation tests
//!
//! Runs the full check sequence against in-memory datasets and the
//! `fixtures/db.json` sample.

use mfdb_common::{Band, Dataset, Festival};
use mfdb_dq::report::{CheckKind, Finding};
use mfdb_dq::{run_checks, validate_file, DuplicateDetector, NameFolding, ValidationOptions};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("db.json")
}

#[test]
fn test_case_variant_in_one_lineup() {
    let dataset = Dataset {
        festivals: vec![Festival::new("Test Fest", &["Nightwish", "nightwish"])],
        ..Default::default()
    };

    let report = run_checks(&dataset, &ValidationOptions::default());

    let band_names = report.section(CheckKind::BandNames).unwrap();
    assert_eq!(band_names.errors(), 1);
    assert_eq!(report.errors, 1);
    assert_eq!(report.warnings, 1);
    assert!(!report.passed());

    let duplicate = report
        .findings()
        .find_map(|f| match f {
            Finding::PossibleDuplicate(pair) => Some(pair),
            _ => None,
        })
        .unwrap();
    assert_eq!(duplicate.distance, 0);
    assert_eq!(duplicate.first.name, "Nightwish");
    assert_eq!(duplicate.second.name, "nightwish");
}

#[test]
fn test_warnings_alone_pass() {
    let dataset = Dataset {
        festivals: vec![Festival::new("Hellfest", &["Metallica", "Metalica"])],
        bands: vec![Band::new("Metallica").with_genres(&["Thrash Metal"])],
        ..Default::default()
    };

    let report = run_checks(&dataset, &ValidationOptions::default());
    assert_eq!(report.errors, 0);
    assert_eq!(report.warnings, 1);
    assert!(report.passed());
}

#[test]
fn test_checks_do_not_short_circuit() {
    let dataset = Dataset {
        bands: vec![Band::new("opeth")
            .with_genres(&["progressive metal"])
            .with_member("Mikael Åkerfeldt", "vocals")],
        ..Default::default()
    };

    let report = run_checks(&dataset, &ValidationOptions::default());
    assert_eq!(report.section(CheckKind::BandNames).unwrap().errors(), 1);
    assert_eq!(report.section(CheckKind::Genres).unwrap().errors(), 1);
    assert_eq!(report.section(CheckKind::MemberRoles).unwrap().errors(), 1);
    assert_eq!(report.errors, 3);
}

#[test]
fn test_fixture_report() {
    let report = validate_file(&fixture_path(), &ValidationOptions::default()).unwrap();

    assert_eq!(report.festivals, 3);
    assert_eq!(report.bands, 3);

    // "children of bodom" in the Hellfest lineup
    assert_eq!(report.section(CheckKind::BandNames).unwrap().errors(), 1);
    // "thrash metal"
    assert_eq!(report.section(CheckKind::Genres).unwrap().errors(), 1);
    // "bass" and the empty role
    assert_eq!(report.section(CheckKind::MemberRoles).unwrap().errors(), 2);
    // "in_flames"
    assert_eq!(report.section(CheckKind::BandKeys).unwrap().errors(), 1);
    // Metallica / Metalica
    assert_eq!(report.warnings, 1);
    assert_eq!(report.errors, 5);
}

#[test]
fn test_threshold_and_folding_from_options() {
    let dataset = Dataset {
        bands: vec![Band::new("The Ocean"), Band::new("Ocean")],
        ..Default::default()
    };

    let strict = ValidationOptions {
        duplicates: DuplicateDetector::new(0, NameFolding::Article),
    };
    let report = run_checks(&dataset, &strict);
    assert_eq!(report.threshold, 0);
    assert_eq!(report.warnings, 1);

    assert_eq!(run_checks(&dataset, &ValidationOptions::default()).warnings, 0);
}

#[test]
fn test_missing_file_fails_before_checks() {
    let result = validate_file(
        &PathBuf::from("/nonexistent/db.json"),
        &ValidationOptions::default(),
    );
    assert!(matches!(result, Err(mfdb_common::Error::NotFound(_))));
}
