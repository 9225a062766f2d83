//! Blocking filesystem reads used by the loader.

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read a file as text.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

/// List the immediate entries of a directory, in the order the OS yields them.
pub fn list_dir(path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(path).map_err(|e| Error::io(path, e))?;

    entries
        .map(|entry| entry.map(|e| e.path()).map_err(|e| Error::io(path, e)))
        .collect()
}
