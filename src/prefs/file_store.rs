//! File-backed preference store
//!
//! Persists the flag map as a JSON file, written through on every change.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::PrefStoreError;
use crate::prefs::{PrefKey, PreferenceStore};

pub struct FilePreferenceStore {
    path: PathBuf,
    flags: HashMap<String, bool>,
}

impl FilePreferenceStore {
    /// Open the store at `path`; a missing file means all keys are unset.
    pub fn open(path: PathBuf) -> Result<Self, PrefStoreError> {
        let flags = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)
                .map_err(|e| PrefStoreError::Corrupt(format!("{}: {}", path.display(), e)))?
        } else {
            HashMap::new()
        };

        Ok(Self { path, flags })
    }

    fn persist(&self) -> Result<(), PrefStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.flags)
            .map_err(|e| PrefStoreError::Corrupt(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get_bool(&self, key: PrefKey, default: bool) -> bool {
        self.flags.get(key.as_str()).copied().unwrap_or(default)
    }

    fn set_bool(&mut self, key: PrefKey, value: bool) -> Result<(), PrefStoreError> {
        self.flags.insert(key.as_str().to_string(), value);
        self.persist()
    }
}
