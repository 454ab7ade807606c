//! Storage operations
//!
//! Folder creation and photo import under a parent directory.

use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::StorageError;
use crate::storage::filesystem;
use crate::storage::results::ImportOutcome;

/// Extension given to every imported photo
pub const IMAGE_EXTENSION: &str = "jpeg";

/// Whether an entry name denotes a stored photo
pub fn is_image_name(name: &str) -> bool {
    name.ends_with(&format!(".{}", IMAGE_EXTENSION))
}

/// Create `parent/name`, including missing intermediate directories.
///
/// Name content is not validated here; whatever the filesystem rejects is
/// reported as a creation failure and not retried.
pub fn create_folder(parent: &Path, name: &str) -> Result<PathBuf, StorageError> {
    let path = parent.join(name);

    match filesystem::create_directory(&path) {
        Ok(()) => {
            info!("Created folder {}", path.display());
            Ok(path)
        }
        Err(source) => {
            error!("Failed to create folder {}: {}", path.display(), source);
            Err(StorageError::CreationFailed {
                path: path.display().to_string(),
                source,
            })
        }
    }
}

/// Write image bytes into `parent` under a freshly generated unique name.
///
/// A random name guarantees no collision with existing files. Empty image
/// data and write failures are swallowed (logged, nothing stored); callers
/// see them only as a `Skipped` outcome.
pub fn import_photo(parent: &Path, image_bytes: &[u8]) -> ImportOutcome {
    if image_bytes.is_empty() {
        warn!("Skipped photo import into {}: no image data", parent.display());
        return ImportOutcome::Skipped;
    }

    let name = format!("{}.{}", Uuid::new_v4(), IMAGE_EXTENSION);
    let path = parent.join(&name);

    match fs::write(&path, image_bytes) {
        Ok(()) => {
            info!("Imported photo {} ({} bytes)", path.display(), image_bytes.len());
            ImportOutcome::Stored(path)
        }
        Err(e) => {
            warn!("Skipped photo import to {}: {}", path.display(), e);
            ImportOutcome::Skipped
        }
    }
}
