//! Listing result types

use std::path::PathBuf;

/// One entry of a directory listing, derived fresh on each enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_directory: bool,
    pub path: PathBuf,
}
