//! Tests for configuration loading and dataset path resolution
//!
//! Uses serial_test to prevent ENV variable race conditions. Tests that touch
//! MFDB_DB_PATH or MFDB_CONFIG are marked with #[serial].

use mfdb_common::config::{
    DatabasePathResolver, TomlConfig, CONFIG_PATH_ENV, DB_PATH_ENV, DEFAULT_DB_FILE,
};
use mfdb_common::Error;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_load_full_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
db_path = "/srv/metal-fests/db.json"

[logging]
level = "debug"

[validation]
duplicate_threshold = 3
hide_warnings = true
"#,
    )
    .unwrap();

    let config = TomlConfig::load(&path).unwrap();
    assert_eq!(config.db_path, Some(PathBuf::from("/srv/metal-fests/db.json")));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.validation.duplicate_threshold, 3);
    assert!(config.validation.hide_warnings);
}

#[test]
fn test_malformed_config_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[validation\nduplicate_threshold = ").unwrap();

    assert!(matches!(TomlConfig::load(&path), Err(Error::Config(_))));
}

#[test]
fn test_explicit_missing_config_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");

    assert!(matches!(TomlConfig::resolve(Some(path.as_path())), Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_config_env_var_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[validation]\nduplicate_threshold = 1\n").unwrap();

    env::set_var(CONFIG_PATH_ENV, &path);
    let config = TomlConfig::resolve(None);
    env::remove_var(CONFIG_PATH_ENV);

    assert_eq!(config.unwrap().validation.duplicate_threshold, 1);
}

#[test]
#[serial]
fn test_db_path_cli_has_highest_priority() {
    env::set_var(DB_PATH_ENV, "/from/env/db.json");
    let config = TomlConfig {
        db_path: Some(PathBuf::from("/from/toml/db.json")),
        ..Default::default()
    };

    let cli = Path::new("/from/cli/db.json");
    let resolved = DatabasePathResolver::new(Some(cli), &config).resolve();
    env::remove_var(DB_PATH_ENV);

    assert_eq!(resolved, PathBuf::from("/from/cli/db.json"));
}

#[test]
#[serial]
fn test_db_path_env_beats_toml() {
    env::set_var(DB_PATH_ENV, "/from/env/db.json");
    let config = TomlConfig {
        db_path: Some(PathBuf::from("/from/toml/db.json")),
        ..Default::default()
    };

    let resolved = DatabasePathResolver::new(None, &config).resolve();
    env::remove_var(DB_PATH_ENV);

    assert_eq!(resolved, PathBuf::from("/from/env/db.json"));
}

#[test]
#[serial]
fn test_db_path_toml_then_default() {
    env::remove_var(DB_PATH_ENV);

    let config = TomlConfig {
        db_path: Some(PathBuf::from("/from/toml/db.json")),
        ..Default::default()
    };
    assert_eq!(
        DatabasePathResolver::new(None, &config).resolve(),
        PathBuf::from("/from/toml/db.json")
    );

    let config = TomlConfig::default();
    assert_eq!(
        DatabasePathResolver::new(None, &config).resolve(),
        PathBuf::from(DEFAULT_DB_FILE)
    );
}
