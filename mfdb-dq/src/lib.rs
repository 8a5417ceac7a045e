//! mfdb-dq library - Data quality checks for the metal festivals database
//!
//! Validates naming conventions (band names, genres, member roles, band
//! keys) and flags near-duplicate band names by edit distance. The checks
//! read a loaded [`mfdb_common::Dataset`] and return a structured
//! [`ValidationReport`]; loading, rendering and exit codes belong to callers.

pub mod capitalization;
pub mod distance;
pub mod duplicates;
pub mod fix;
pub mod keys;
pub mod normalize;
pub mod render;
pub mod report;
pub mod runner;

pub use duplicates::{DuplicateDetector, NameFolding};
pub use render::{OutputFormat, TextOptions};
pub use report::{Finding, Severity, ValidationReport};
pub use runner::{run_checks, validate_file, ValidationOptions};
