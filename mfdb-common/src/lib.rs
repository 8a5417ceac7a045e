//! # MFDB Common Library
//!
//! Shared code for the metal festivals database tools including:
//! - Dataset models (festivals, bands, members)
//! - JSON loading and atomic saving of `db.json`
//! - Configuration loading and database path resolution
//! - Common error type

pub mod config;
pub mod db;
pub mod error;

pub use db::models::{Band, BandRef, Dataset, Festival, LineupEntry, Member};
pub use db::LenientVec;
pub use error::{Error, Result};
