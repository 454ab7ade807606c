//! File system storage management
//!
//! Folder creation, photo import and size display over the document root.

pub mod filesystem;
pub mod operations;
pub mod results;
pub mod size;
pub mod validation;

pub use operations::{IMAGE_EXTENSION, create_folder, import_photo, is_image_name};
pub use results::ImportOutcome;
pub use size::format_size;
pub use validation::is_safe_entry_name;
