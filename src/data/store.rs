//! JSON file helpers. Every failure is reported as a [`FileError`] carrying the path.

use crate::error::FileError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Reads and decodes a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FileError> {
    debug!(path = %path.display(), "Reading JSON file");
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FileError::Missing(path.to_path_buf()),
        _ => FileError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    serde_json::from_str(&content).map_err(|e| FileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes a value as pretty-printed UTF-8 JSON, creating parent directories as needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), FileError> {
    debug!(path = %path.display(), "Writing JSON file");
    let write_error = |message: String| FileError::Write {
        path: path.to_path_buf(),
        message,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| write_error(format!("Failed to create directory: {}", e)))?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|e| write_error(e.to_string()))?;
    fs::write(path, json).map_err(|e| write_error(e.to_string()))
}

pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Removes a file. A missing file is reported as [`FileError::Missing`].
pub fn delete_file(path: &Path) -> Result<(), FileError> {
    fs::remove_file(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FileError::Missing(path.to_path_buf()),
        _ => FileError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })
}
