//! Folder browser sessions
//!
//! A browser is scoped to one open directory: it owns that directory's
//! private listing accumulator and delegates mutations to storage. Opening
//! a subfolder constructs a new browser for the child path with a fresh
//! accumulator, mirroring the recursive navigation of the source.

use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::listing::{DirectoryEntry, DirectoryLister};
use crate::prefs::PreferenceStore;
use crate::storage::results::ImportOutcome;
use crate::storage::{self, filesystem};

/// Title of the root browser, matching the top-level screen of the source.
const ROOT_TITLE: &str = "Documents";

pub struct FolderBrowser {
    path: PathBuf,
    title: String,
    lister: DirectoryLister,
}

impl FolderBrowser {
    /// Open a browser over the document root, creating it if absent.
    pub fn open_root(root: PathBuf) -> Result<Self, StorageError> {
        filesystem::create_directory(&root).map_err(|source| StorageError::CreationFailed {
            path: root.display().to_string(),
            source,
        })?;

        Ok(Self {
            lister: DirectoryLister::new(root.clone()),
            title: ROOT_TITLE.to_string(),
            path: root,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Refresh and return the listing for the open directory.
    pub fn entries(&mut self, prefs: &dyn PreferenceStore) -> &[DirectoryEntry] {
        self.lister.refresh(prefs)
    }

    /// Create a subfolder of the open directory.
    pub fn create_folder(&self, name: &str) -> Result<PathBuf, StorageError> {
        storage::create_folder(&self.path, name)
    }

    /// Import a picked photo into the open directory.
    pub fn import_photo(&self, image_bytes: &[u8]) -> ImportOutcome {
        storage::import_photo(&self.path, image_bytes)
    }

    /// Open a subfolder as a new browser scoped to the child path.
    ///
    /// Photos are leaves: image names are refused before touching the
    /// filesystem, as in the source.
    pub fn open(&self, name: &str) -> Result<FolderBrowser, StorageError> {
        if storage::is_image_name(name) {
            return Err(StorageError::NotADirectory(name.to_string()));
        }

        let child = self.path.join(name);
        if !child.exists() {
            return Err(StorageError::DirectoryNotFound(
                child.display().to_string(),
            ));
        }
        if !filesystem::directory_exists(&child) {
            return Err(StorageError::NotADirectory(child.display().to_string()));
        }

        Ok(FolderBrowser {
            lister: DirectoryLister::new(child.clone()),
            title: name.to_string(),
            path: child,
        })
    }
}
