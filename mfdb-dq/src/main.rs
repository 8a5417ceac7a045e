//! mfdb-dq (Data Quality) - Validator for the metal festivals database
//!
//! Loads `db.json`, runs the capitalization, key and duplicate checks, prints
//! the report and exits non-zero when any error was found. Warnings never
//! change the exit status.

use anyhow::{Context, Result};
use clap::Parser;
use mfdb_common::config::{DatabasePathResolver, TomlConfig};
use mfdb_common::db::{load_dataset, save_dataset};
use mfdb_dq::fix::apply_fixes;
use mfdb_dq::render::render;
use mfdb_dq::{run_checks, DuplicateDetector, NameFolding, OutputFormat, TextOptions, ValidationOptions};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Command-line arguments for mfdb-dq
#[derive(Parser, Debug)]
#[command(name = "mfdb-dq")]
#[command(about = "Validate db.json naming conventions and detect duplicate bands")]
#[command(version)]
struct Args {
    /// Path to db.json (overrides MFDB_DB_PATH and the config file)
    #[arg(long, value_name = "FILE")]
    db: Option<PathBuf>,

    /// TOML config file (default: ~/.config/mfdb/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum edit distance reported as a possible duplicate
    #[arg(short, long, env = "MFDB_DUPLICATE_THRESHOLD")]
    threshold: Option<usize>,

    /// Name folding before duplicate comparison: case, whitespace or article
    #[arg(long, default_value = "case")]
    normalization: NameFolding,

    /// Hide possible-duplicate details, keep the count
    #[arg(long)]
    hide_warnings: bool,

    /// Output format: text, json or github
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Correct capitalization and key issues and save db.json
    #[arg(long)]
    fix: bool,

    /// Also write the report as JSON to this file
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Config is read before tracing starts so its log level can apply
    let config = TomlConfig::resolve(args.config.as_deref());
    let level = match (args.verbose, &config) {
        (0, Ok(config)) => config.logging.level.clone(),
        (0, Err(_)) => "warn".to_string(),
        (1, _) => "info".to_string(),
        _ => "debug".to_string(),
    };
    init_tracing(&level);

    let result = config
        .context("Failed to load configuration")
        .and_then(|config| run(&args, &config));

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ Validation failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &TomlConfig) -> Result<ExitCode> {
    info!("Starting mfdb-dq v{}", env!("CARGO_PKG_VERSION"));

    let db_path = DatabasePathResolver::new(args.db.as_deref(), config).resolve();
    info!("Database path: {}", db_path.display());

    let options = ValidationOptions {
        duplicates: DuplicateDetector::new(
            args.threshold
                .unwrap_or(config.validation.duplicate_threshold),
            args.normalization,
        ),
    };

    // Structural load; nothing is checked when this fails
    let mut dataset = load_dataset(&db_path)
        .with_context(|| format!("Could not load {}", db_path.display()))?;

    if args.fix {
        let outcome = apply_fixes(&dataset);
        if outcome.fixed > 0 {
            save_dataset(&db_path, &outcome.dataset)
                .with_context(|| format!("Could not save {}", db_path.display()))?;
            info!("Fixed {} value(s) in {}", outcome.fixed, db_path.display());
        } else {
            info!("Nothing to fix");
        }
        if args.format == OutputFormat::Text {
            println!("🔧 Fixed {} value(s)", outcome.fixed);
        }
        dataset = outcome.dataset;
    }

    let report = run_checks(&dataset, &options);

    if let Some(export_path) = &args.export {
        report
            .export_json(export_path)
            .with_context(|| format!("Could not export report to {}", export_path.display()))?;
        info!("Report exported to {}", export_path.display());
    }

    let text_options = TextOptions {
        color: !args.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal(),
        hide_warnings: args.hide_warnings || config.validation.hide_warnings,
    };
    let output = render(&report, args.format, &text_options).context("Could not render report")?;
    print!("{}", output);

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
