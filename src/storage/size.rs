//! Photo size display
//!
//! Formats the size of a stored photo in megabytes with two decimal places.
//! Reads the stored byte length off the filesystem rather than re-encoding
//! the image, which gives the same visible result without loading the file.

use log::error;
use std::fs;
use std::path::Path;

use crate::storage::operations::is_image_name;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Size string for a stored photo, e.g. `"1.27"` (megabytes).
///
/// Non-image paths and unreadable files yield an empty string.
pub fn format_size(path: &Path) -> String {
    let is_image = path
        .file_name()
        .map(|name| is_image_name(&name.to_string_lossy()))
        .unwrap_or(false);

    if !is_image {
        return String::new();
    }

    match fs::metadata(path) {
        Ok(metadata) => {
            let megabytes = metadata.len() as f64 / BYTES_PER_MEGABYTE;
            format!("{:.2}", megabytes)
        }
        Err(e) => {
            error!("Cannot read size of {}: {}", path.display(), e);
            String::new()
        }
    }
}
