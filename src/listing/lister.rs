//! Accumulating directory lister
//!
//! Each refresh merges newly discovered names into the accumulated list
//! instead of rebuilding it. Names seen once are kept for the lifetime of
//! the lister, so an entry deleted externally between two refreshes still
//! appears until the lister is dropped. Carried over from the source as an
//! acknowledged limitation.

use log::error;
use std::path::{Path, PathBuf};

use crate::listing::operations::read_directory_names;
use crate::listing::results::DirectoryEntry;
use crate::prefs::{PrefKey, PreferenceStore};

pub struct DirectoryLister {
    dir: PathBuf,
    entries: Vec<DirectoryEntry>,
}

impl DirectoryLister {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            entries: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Re-enumerate the directory and return the accumulated, sorted entries.
    ///
    /// An unreadable directory is logged and contributes nothing; the
    /// previously accumulated entries are returned unchanged. The sort
    /// direction preference is read on every call.
    pub fn refresh(&mut self, prefs: &dyn PreferenceStore) -> &[DirectoryEntry] {
        match read_directory_names(&self.dir) {
            Ok(names) => {
                for name in names {
                    if self.entries.iter().any(|entry| entry.name == name) {
                        continue;
                    }
                    let path = self.dir.join(&name);
                    let is_directory = path.is_dir();
                    self.entries.push(DirectoryEntry {
                        name,
                        is_directory,
                        path,
                    });
                }
            }
            Err(e) => {
                error!("{}", e);
            }
        }

        if prefs.get_bool(PrefKey::SortAscending, false) {
            self.entries.sort_by(|a, b| a.name.cmp(&b.name));
        } else {
            self.entries.sort_by(|a, b| b.name.cmp(&a.name));
        }

        &self.entries
    }

    /// The accumulated entries as of the last refresh.
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::operations::HIDDEN_ARTIFACT;
    use crate::prefs::MemoryPreferenceStore;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_sorts_ascending_when_preference_set() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("b.txt")).unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        File::create(dir.path().join(HIDDEN_ARTIFACT)).unwrap();

        let mut prefs = MemoryPreferenceStore::new();
        prefs.set_bool(PrefKey::SortAscending, true).unwrap();

        let mut lister = DirectoryLister::new(dir.path().to_path_buf());
        assert_eq!(names(lister.refresh(&prefs)), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_sorts_descending_when_preference_unset() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("b.txt")).unwrap();
        File::create(dir.path().join("a.txt")).unwrap();

        let prefs = MemoryPreferenceStore::new();
        let mut lister = DirectoryLister::new(dir.path().to_path_buf());
        assert_eq!(names(lister.refresh(&prefs)), vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn test_refresh_is_idempotent_without_changes() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();

        let prefs = MemoryPreferenceStore::new();
        let mut lister = DirectoryLister::new(dir.path().to_path_buf());
        lister.refresh(&prefs);
        lister.refresh(&prefs);
        assert_eq!(names(lister.entries()), vec!["a.txt"]);
    }

    #[test]
    fn test_new_entry_appears_exactly_once() {
        let dir = tempdir().unwrap();
        let prefs = MemoryPreferenceStore::new();
        let mut lister = DirectoryLister::new(dir.path().to_path_buf());

        lister.refresh(&prefs);
        fs::create_dir(dir.path().join("New")).unwrap();
        lister.refresh(&prefs);
        lister.refresh(&prefs);

        assert_eq!(names(lister.entries()), vec!["New"]);
        assert!(lister.entries()[0].is_directory);
    }

    #[test]
    fn test_deleted_entry_stays_until_dropped() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();

        let prefs = MemoryPreferenceStore::new();
        let mut lister = DirectoryLister::new(dir.path().to_path_buf());
        lister.refresh(&prefs);

        fs::remove_file(dir.path().join("a.txt")).unwrap();
        assert_eq!(names(lister.refresh(&prefs)), vec!["a.txt"]);
    }

    #[test]
    fn test_unreadable_directory_keeps_accumulated_entries() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();

        let prefs = MemoryPreferenceStore::new();
        let mut lister = DirectoryLister::new(dir.path().to_path_buf());
        lister.refresh(&prefs);

        drop(dir); // directory vanishes underneath the lister
        assert_eq!(names(lister.refresh(&prefs)), vec!["a.txt"]);
    }
}
