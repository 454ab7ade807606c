//! File system operations
//!
//! Thin wrappers over the platform filesystem used by storage and browser.

use std::fs;
use std::io::Result;
use std::path::Path;

/// Create a directory, including missing intermediate directories
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
}

/// Check if file exists
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
