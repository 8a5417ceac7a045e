//! Configuration loading and database path resolution

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming the dataset file
pub const DB_PATH_ENV: &str = "MFDB_DB_PATH";

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "MFDB_CONFIG";

/// Dataset file used when nothing else is configured
pub const DEFAULT_DB_FILE: &str = "db.json";

/// Default maximum edit distance for possible duplicates
pub const DEFAULT_DUPLICATE_THRESHOLD: usize = 2;

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Location of `db.json`
    pub db_path: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum edit distance at which two band names are reported
    pub duplicate_threshold: usize,
    /// Report duplicate counts without listing each pair
    pub hide_warnings: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            duplicate_threshold: DEFAULT_DUPLICATE_THRESHOLD,
            hide_warnings: false,
        }
    }
}

impl TomlConfig {
    /// Parse a config file. A missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Read {} failed: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
    }

    /// Load configuration following priority order:
    /// 1. Explicit path (command-line argument)
    /// 2. `MFDB_CONFIG` environment variable
    /// 3. Platform config directory (`~/.config/mfdb/config.toml` on Linux)
    ///
    /// Explicitly named files must exist. The platform default is optional:
    /// when it is absent, compiled defaults are used.
    pub fn resolve(cli_arg: Option<&Path>) -> Result<Self> {
        if let Some(path) = cli_arg {
            return Self::load(path);
        }

        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Self::load(Path::new(&path));
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                debug!("Using config file {}", path.display());
                Self::load(&path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Platform config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mfdb").join("config.toml"))
}

/// Dataset path resolution following priority order:
/// 1. Command-line argument (highest priority)
/// 2. `MFDB_DB_PATH` environment variable
/// 3. `db_path` in the TOML config
/// 4. `db.json` in the current directory (fallback)
pub struct DatabasePathResolver<'a> {
    cli_arg: Option<&'a Path>,
    config: &'a TomlConfig,
}

impl<'a> DatabasePathResolver<'a> {
    pub fn new(cli_arg: Option<&'a Path>, config: &'a TomlConfig) -> Self {
        Self { cli_arg, config }
    }

    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = self.cli_arg {
            return path.to_path_buf();
        }

        if let Ok(path) = std::env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
            warn!("{} is set but empty, ignoring", DB_PATH_ENV);
        }

        if let Some(path) = &self.config.db_path {
            return path.clone();
        }

        PathBuf::from(DEFAULT_DB_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TomlConfig::default();
        assert_eq!(config.db_path, None);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.validation.duplicate_threshold, 2);
        assert!(!config.validation.hide_warnings);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TomlConfig = toml::from_str("[validation]\nhide_warnings = true\n").unwrap();
        assert!(config.validation.hide_warnings);
        assert_eq!(config.validation.duplicate_threshold, 2);
        assert_eq!(config.logging.level, "warn");
    }
}
