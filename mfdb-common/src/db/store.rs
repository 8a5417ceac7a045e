//! Loading and saving `db.json`
//!
//! Loading is the structural gate in front of every check: a missing file or
//! malformed JSON is reported here and nothing downstream runs.

use crate::db::models::Dataset;
use crate::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Read and parse the dataset at `path`
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(Error::Io(e)),
    };

    let dataset = parse_dataset(&content)?;
    info!(
        "Loaded {} festivals and {} bands from {}",
        dataset.festivals.len(),
        dataset.bands.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse a dataset from JSON text
pub fn parse_dataset(content: &str) -> Result<Dataset> {
    Ok(serde_json::from_str(content)?)
}

/// Write the dataset to `path` atomically (temp file + rename)
///
/// Output is pretty-printed with two-space indentation and a trailing newline.
pub fn save_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let mut json = serde_json::to_string_pretty(dataset)?;
    json.push('\n');

    let temp_path = path.with_extension("json.tmp");
    {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::Io(e));
    }

    debug!("Wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}
