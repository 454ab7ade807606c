//! Raw directory enumeration

use std::fs;
use std::path::Path;

use crate::error::ListError;

/// OS-generated hidden metadata artifact, never shown to the user
pub const HIDDEN_ARTIFACT: &str = ".DS_Store";

/// Enumerate the immediate children of `path`, with the hidden artifact
/// filtered out. Enumeration order is whatever the filesystem yields.
pub fn read_directory_names(path: &Path) -> Result<Vec<String>, ListError> {
    let entries = fs::read_dir(path).map_err(|source| ListError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;

    let names = entries
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name != HIDDEN_ARTIFACT)
        .collect();

    Ok(names)
}
