//! Structured validation results
//!
//! Checks return [`CheckOutcome`] values; the runner collects them into a
//! [`ValidationReport`]. Nothing here prints: rendering lives in `render`.

use crate::duplicates::DuplicatePair;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Placeholder shown for records without a name
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Fails the run
    Error,
    /// Advisory only
    Warning,
}

/// The checks, in the order the runner executes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    BandNames,
    Genres,
    MemberRoles,
    BandKeys,
    Duplicates,
}

impl CheckKind {
    pub fn title(&self) -> &'static str {
        match self {
            CheckKind::BandNames => "BAND NAME CAPITALIZATION",
            CheckKind::Genres => "MUSIC GENRE CAPITALIZATION",
            CheckKind::MemberRoles => "BAND MEMBER ROLE CAPITALIZATION",
            CheckKind::BandKeys => "BAND KEY COMPLIANCE",
            CheckKind::Duplicates => "DUPLICATE DETECTION (Levenshtein Distance)",
        }
    }
}

/// Where an offending value was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum Location {
    /// A lineup entry of a festival
    FestivalLineup { festival: String },
    /// A record of the bands collection
    Band { band: String },
    /// A member of a band
    Member { band: String, member: String },
}

/// Which label a capitalization finding is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelField {
    BandName,
    Genre,
    Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapitalizationIssue {
    pub location: Location,
    pub field: LabelField,
    pub value: String,
    /// Corrected value, when one can be derived
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandKeyIssue {
    pub location: Location,
    pub name: String,
    pub key: String,
    pub expected: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    Capitalization(CapitalizationIssue),
    BandKey(BandKeyIssue),
    PossibleDuplicate(DuplicatePair),
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Finding::Capitalization(_) | Finding::BandKey(_) => Severity::Error,
            Finding::PossibleDuplicate(_) => Severity::Warning,
        }
    }

    /// One-line human-readable description
    pub fn describe(&self) -> String {
        match self {
            Finding::Capitalization(issue) => describe_capitalization(issue),
            Finding::BandKey(issue) => {
                let prefix = match &issue.location {
                    Location::FestivalLineup { festival } => format!(
                        "Festival '{}', Band '{}'",
                        or_unknown(festival),
                        issue.name
                    ),
                    _ => format!("Band '{}'", issue.name),
                };
                format!(
                    "{}: Key '{}' not compliant (should be '{}')",
                    prefix, issue.key, issue.expected
                )
            }
            Finding::PossibleDuplicate(pair) => format!(
                "Potential duplicate (distance={}): '{}' ({}) ↔ '{}' ({})",
                pair.distance, pair.first.name, pair.first.source, pair.second.name, pair.second.source
            ),
        }
    }
}

fn describe_capitalization(issue: &CapitalizationIssue) -> String {
    let message = match (&issue.location, issue.field) {
        (Location::FestivalLineup { festival }, _) => format!(
            "Festival '{}': Band name '{}' not properly capitalized",
            or_unknown(festival),
            issue.value
        ),
        (Location::Band { .. }, LabelField::BandName) => {
            format!("Band '{}' not properly capitalized", issue.value)
        }
        (Location::Band { band }, _) => format!(
            "Band '{}': Genre '{}' not properly capitalized",
            or_unknown(band),
            issue.value
        ),
        (Location::Member { band, member }, _) => format!(
            "Band '{}', Member '{}': Role '{}' first word not capitalized",
            or_unknown(band),
            or_unknown(member),
            issue.value
        ),
    };

    match &issue.suggestion {
        Some(suggestion) => format!("{} (should be '{}')", message, suggestion),
        None => message,
    }
}

/// Substitute [`UNKNOWN`] for an empty record name
pub fn or_unknown(name: &str) -> &str {
    if name.is_empty() {
        UNKNOWN
    } else {
        name
    }
}

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub check: CheckKind,
    /// Number of values inspected
    pub checked: usize,
    pub findings: Vec<Finding>,
}

impl CheckOutcome {
    pub fn new(check: CheckKind) -> Self {
        Self {
            check,
            checked: 0,
            findings: Vec::new(),
        }
    }

    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity() == severity)
            .count()
    }
}

/// Complete validation run
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub generated_at: DateTime<Utc>,
    /// Number of festivals in the dataset
    pub festivals: usize,
    /// Number of records in the bands collection
    pub bands: usize,
    /// Duplicate-detection threshold used
    pub threshold: usize,
    pub sections: Vec<CheckOutcome>,
    pub errors: usize,
    pub warnings: usize,
}

impl ValidationReport {
    pub fn new(festivals: usize, bands: usize, threshold: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            festivals,
            bands,
            threshold,
            sections: Vec::new(),
            errors: 0,
            warnings: 0,
        }
    }

    /// Append a check result and update the counters
    pub fn push(&mut self, outcome: CheckOutcome) {
        self.errors += outcome.errors();
        self.warnings += outcome.warnings();
        self.sections.push(outcome);
    }

    /// Warnings alone never fail a run
    pub fn passed(&self) -> bool {
        self.errors == 0
    }

    pub fn section(&self, check: CheckKind) -> Option<&CheckOutcome> {
        self.sections.iter().find(|s| s.check == check)
    }

    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.sections.iter().flat_map(|s| s.findings.iter())
    }

    /// Export report to JSON file
    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
