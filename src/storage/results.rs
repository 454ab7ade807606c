//! Storage result types

use std::path::{Path, PathBuf};

/// Outcome of a photo import.
///
/// Import is best effort: an empty image or a failed write yields `Skipped`
/// rather than an error, and no partial file is left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The photo was written to the given path
    Stored(PathBuf),
    /// Nothing was written
    Skipped,
}

impl ImportOutcome {
    pub fn stored_path(&self) -> Option<&Path> {
        match self {
            ImportOutcome::Stored(path) => Some(path),
            ImportOutcome::Skipped => None,
        }
    }
}
