//! Directory listing
//!
//! Enumerates a directory, filters OS artifacts, deduplicates by name and
//! sorts according to the stored sort preference.

pub mod lister;
pub mod operations;
pub mod results;

pub use lister::DirectoryLister;
pub use operations::{HIDDEN_ARTIFACT, read_directory_names};
pub use results::DirectoryEntry;
