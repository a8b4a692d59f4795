//! Output file writing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

/// Final path for an output file.
///
/// With `uppercase` set only the file name is uppercased; the directories
/// leading to it are left alone so they still resolve on case-sensitive
/// file systems.
pub fn output_path(path: &Path, uppercase: bool) -> PathBuf {
    if !uppercase {
        return path.to_path_buf();
    }
    match path.file_name() {
        Some(name) => path.with_file_name(name.to_string_lossy().to_uppercase()),
        None => path.to_path_buf(),
    }
}

/// Write raw bytes to `path`, replacing any existing file.
///
/// Returns the path actually written.
pub fn write_output(path: &Path, bytes: &[u8], uppercase: bool) -> Result<PathBuf> {
    let path = output_path(path, uppercase);
    info!("Writing {} bytes to {}", bytes.len(), path.display());
    fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
