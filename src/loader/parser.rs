use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Parses a JSON file into a given type `T`.
///
/// Errors are automatically converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let data = fs::read_to_string(file_path).map_err(Error::IoError)?;

    let parsed_data: T = serde_json::from_str(&data).map_err(Error::DeserializationError)?;

    Ok(parsed_data)
}

/// Serializes `value` as pretty JSON and replaces `file_path` with it.
///
/// The document is written to a temporary file next to the target and then
/// renamed over it, so a crash mid-write leaves the previous file intact. An
/// existing target keeps its permissions.
pub fn write_json_file<T: Serialize>(file_path: &Path, value: &T) -> Result<()> {
    let directory = match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory)?;
    serde_json::to_writer_pretty(&mut file, value)?;
    file.write_all(b"\n")?;
    file.as_file().sync_all()?;

    // The temp file is created private; keep whatever mode the target had.
    if let Ok(metadata) = fs::metadata(file_path) {
        file.as_file().set_permissions(metadata.permissions())?;
    }
    file.persist(file_path).map_err(|e| Error::IoError(e.error))?;

    Ok(())
}
