//! In-memory preference store for tests and ephemeral sessions.

use std::collections::HashMap;

use crate::error::PrefStoreError;
use crate::prefs::{PrefKey, PreferenceStore};

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    flags: HashMap<String, bool>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_bool(&self, key: PrefKey, default: bool) -> bool {
        self.flags.get(key.as_str()).copied().unwrap_or(default)
    }

    fn set_bool(&mut self, key: PrefKey, value: bool) -> Result<(), PrefStoreError> {
        self.flags.insert(key.as_str().to_string(), value);
        Ok(())
    }
}
