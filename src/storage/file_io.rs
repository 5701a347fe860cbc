//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't truncate data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::TrackerError;

/// Read JSON from a file that must exist
pub fn read_json<T, P>(path: P) -> Result<T, TrackerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| TrackerError::read(path, e))?;

    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader).map_err(|e| TrackerError::read(path, e))?;
    debug!(path = %path.display(), "read json file");
    Ok(value)
}

/// Create `path` holding `data` pretty-printed, unless it already exists
///
/// Returns `true` when the file was created.
pub fn create_json_if_missing<T, P>(path: P, data: &T) -> Result<bool, TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if path.exists() {
        return Ok(false);
    }

    ensure_parent(path)?;

    let contents = serde_json::to_string_pretty(data).map_err(|e| TrackerError::write(path, e))?;
    fs::write(path, contents).map_err(|e| TrackerError::write(path, e))?;
    debug!(path = %path.display(), "created json file");
    Ok(true)
}

/// Write compact JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    ensure_parent(path)?;

    // Same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| TrackerError::write(&temp_path, e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, data).map_err(|e| TrackerError::write(path, e))?;

    writer.flush().map_err(|e| TrackerError::write(path, e))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::write(path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::write(path, e)
    })?;

    debug!(path = %path.display(), "wrote json file");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), TrackerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| TrackerError::write(parent, e))?;
        }
    }
    Ok(())
}
