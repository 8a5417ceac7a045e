//! Report rendering
//!
//! Turns a [`ValidationReport`] into text for a terminal, JSON for tooling, or
//! GitHub Actions workflow commands for CI annotations.

use crate::report::{CheckKind, CheckOutcome, Finding, Severity, ValidationReport};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Github,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "github" => Ok(OutputFormat::Github),
            other => Err(format!(
                "unknown output format '{}' (expected text, json or github)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Github => "github",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Emit ANSI color codes
    pub color: bool,
    /// Show duplicate counts without listing each pair
    pub hide_warnings: bool,
}

/// Render `report` in the requested format
pub fn render(
    report: &ValidationReport,
    format: OutputFormat,
    options: &TextOptions,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(TextFormatter::new(*options).format_report(report)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Github => Ok(format_github(report)),
    }
}

const RULE_WIDTH: usize = 80;

mod ansi {
    pub const BLUE: &str = "\x1b[94m";
    pub const CYAN: &str = "\x1b[96m";
    pub const GREEN: &str = "\x1b[92m";
    pub const YELLOW: &str = "\x1b[93m";
    pub const RED: &str = "\x1b[91m";
    pub const BOLD: &str = "\x1b[1m";
    pub const END: &str = "\x1b[0m";
}

/// Terminal formatter
pub struct TextFormatter {
    options: TextOptions,
}

impl TextFormatter {
    pub fn new(options: TextOptions) -> Self {
        Self { options }
    }

    fn paint(&self, text: &str, codes: &[&str]) -> String {
        if self.options.color {
            format!("{}{}{}", codes.concat(), text, ansi::END)
        } else {
            text.to_string()
        }
    }

    fn header(&self, out: &mut String, title: &str) {
        let rule = self.paint(&"═".repeat(RULE_WIDTH), &[ansi::BOLD]);
        out.push_str(&format!(
            "\n{}\n{}\n{}\n\n",
            rule,
            self.paint(&format!("  {}", title), &[ansi::BOLD, ansi::CYAN]),
            rule
        ));
    }

    fn success(&self, out: &mut String, text: &str) {
        out.push_str(&format!("{} {}\n", self.paint("✓", &[ansi::GREEN]), text));
    }

    fn info(&self, out: &mut String, text: &str) {
        out.push_str(&format!("{} {}\n", self.paint("ℹ", &[ansi::BLUE]), text));
    }

    fn finding(&self, out: &mut String, finding: &Finding) {
        let (symbol, color) = match finding.severity() {
            Severity::Error => ("✗", ansi::RED),
            Severity::Warning => ("⚠", ansi::YELLOW),
        };
        out.push_str(&format!(
            "{} {}\n",
            self.paint(symbol, &[color]),
            self.paint(&format!("  {}", finding.describe()), &[color])
        ));
    }

    /// Format the full report
    pub fn format_report(&self, report: &ValidationReport) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "\n{}\n{}\n",
            self.paint("🎸 Metal Festivals Database Validator", &[ansi::BOLD, ansi::CYAN]),
            self.paint(&"=".repeat(RULE_WIDTH), &[ansi::BOLD])
        ));
        self.info(
            &mut out,
            &format!(
                "Loaded {} festivals and {} bands",
                report.festivals, report.bands
            ),
        );

        for section in &report.sections {
            self.format_section(&mut out, section, report.threshold);
        }

        self.format_summary(&mut out, report);
        out
    }

    /// Format one check's findings and closing line
    pub fn format_section(&self, out: &mut String, section: &CheckOutcome, threshold: usize) {
        self.header(out, section.check.title());

        if section.check == CheckKind::Duplicates {
            self.format_duplicates(out, section, threshold);
            return;
        }

        for finding in &section.findings {
            self.finding(out, finding);
        }

        if section.errors() == 0 {
            let message = match section.check {
                CheckKind::BandNames => {
                    format!("All {} band names are properly capitalized", section.checked)
                }
                CheckKind::Genres => {
                    format!("All {} genre entries are properly capitalized", section.checked)
                }
                CheckKind::MemberRoles => {
                    format!("All {} member roles are properly capitalized", section.checked)
                }
                CheckKind::BandKeys => format!("All {} band keys are compliant", section.checked),
                CheckKind::Duplicates => unreachable!("handled above"),
            };
            self.success(out, &message);
        }
    }

    fn format_duplicates(&self, out: &mut String, section: &CheckOutcome, threshold: usize) {
        self.info(
            out,
            &format!(
                "Checking {} band entries for potential duplicates (threshold: {})...",
                section.checked, threshold
            ),
        );

        if !self.options.hide_warnings {
            for finding in &section.findings {
                self.finding(out, finding);
            }
        }

        let found = section.warnings();
        if found == 0 {
            self.success(out, "No potential duplicates detected");
        } else if self.options.hide_warnings {
            self.info(
                out,
                &format!(
                    "Found {} potential duplicate(s) (use without --hide-warnings to see details)",
                    found
                ),
            );
        } else {
            self.info(out, &format!("Found {} potential duplicate(s)", found));
        }
    }

    fn format_summary(&self, out: &mut String, report: &ValidationReport) {
        self.header(out, "VALIDATION SUMMARY");

        if report.errors == 0 && report.warnings == 0 {
            out.push_str(&self.paint(
                "✅ All validations passed! No issues found.",
                &[ansi::BOLD, ansi::GREEN],
            ));
            out.push('\n');
            return;
        }

        if report.errors > 0 {
            out.push_str(&self.paint(
                &format!("❌ Found {} error(s)", report.errors),
                &[ansi::BOLD, ansi::RED],
            ));
            out.push('\n');
            out.push_str(&self.paint(
                "💡 Tip: Run with --fix to automatically correct capitalization and key issues",
                &[ansi::BLUE],
            ));
            out.push('\n');
        }
        if report.warnings > 0 {
            out.push_str(&self.paint(
                &format!("⚠️  Found {} warning(s)", report.warnings),
                &[ansi::BOLD, ansi::YELLOW],
            ));
            out.push('\n');
        }
    }
}

/// GitHub Actions workflow commands, one per finding
pub fn format_github(report: &ValidationReport) -> String {
    let mut out = String::new();
    for section in &report.sections {
        for finding in &section.findings {
            let level = match finding.severity() {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            out.push_str(&format!(
                "::{} title={}::{}\n",
                level,
                escape_property(section.check.title()),
                escape_data(&finding.describe())
            ));
        }
    }
    out.push_str(&format!(
        "::notice title=Validation summary::{} error(s), {} warning(s)\n",
        report.errors, report.warnings
    ));
    out
}

fn escape_data(text: &str) -> String {
    text.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(text: &str) -> String {
    escape_data(text).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{run_checks, ValidationOptions};
    use mfdb_common::{Band, Dataset, Festival};

    fn report() -> ValidationReport {
        let dataset = Dataset {
            festivals: vec![Festival::new("Test Fest", &["Nightwish", "nightwish"])],
            bands: vec![Band::new("Epica").with_genres(&["Symphonic Metal"])],
            ..Default::default()
        };
        run_checks(&dataset, &ValidationOptions::default())
    }

    #[test]
    fn test_plain_text_report() {
        let text = render(&report(), OutputFormat::Text, &TextOptions::default()).unwrap();

        assert!(!text.contains('\x1b'));
        assert!(text.contains("Loaded 1 festivals and 1 bands"));
        assert!(text.contains(
            "✗   Festival 'Test Fest': Band name 'nightwish' not properly capitalized (should be 'Nightwish')"
        ));
        assert!(text.contains("✓ All 1 genre entries are properly capitalized"));
        assert!(text.contains("'Nightwish' (Festival: Test Fest) ↔ 'nightwish' (Festival: Test Fest)"));
        assert!(text.contains("❌ Found 1 error(s)"));
        assert!(text.contains("⚠️  Found 1 warning(s)"));
    }

    #[test]
    fn test_hide_warnings_keeps_count() {
        let options = TextOptions {
            color: false,
            hide_warnings: true,
        };
        let text = render(&report(), OutputFormat::Text, &options).unwrap();

        assert!(!text.contains("Potential duplicate"));
        assert!(text.contains("Found 1 potential duplicate(s) (use without --hide-warnings"));
        assert!(text.contains("⚠️  Found 1 warning(s)"));
    }

    #[test]
    fn test_color_codes() {
        let options = TextOptions {
            color: true,
            hide_warnings: false,
        };
        let text = render(&report(), OutputFormat::Text, &options).unwrap();
        assert!(text.contains("\x1b[91m✗\x1b[0m"));
    }

    #[test]
    fn test_clean_report() {
        let report = run_checks(&Dataset::default(), &ValidationOptions::default());
        let text = render(&report, OutputFormat::Text, &TextOptions::default()).unwrap();
        assert!(text.contains("✅ All validations passed! No issues found."));
        assert!(text.contains("No potential duplicates detected"));
    }

    #[test]
    fn test_json_output() {
        let json = render(&report(), OutputFormat::Json, &TextOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["errors"], 1);
        assert_eq!(value["warnings"], 1);
        assert_eq!(value["sections"][0]["check"], "band_names");
        assert_eq!(value["sections"][4]["findings"][0]["kind"], "possible_duplicate");
        assert_eq!(value["sections"][4]["findings"][0]["distance"], 0);
    }

    #[test]
    fn test_github_annotations() {
        let text = format_github(&report());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("::error title=BAND NAME CAPITALIZATION::Festival 'Test Fest'"));
        assert!(lines[1].starts_with("::warning title=DUPLICATE DETECTION (Levenshtein Distance)::"));
        assert_eq!(lines[2], "::notice title=Validation summary::1 error(s), 1 warning(s)");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
