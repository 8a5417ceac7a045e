//! Common error types for MFDB

use thiserror::Error;

/// Common result type for MFDB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across MFDB tools
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not valid JSON or does not match the expected structure
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested file not found
    #[error("File not found: {0}")]
    NotFound(String),
}
