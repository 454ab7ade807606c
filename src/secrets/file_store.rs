//! File-backed credential store
//!
//! Persists the account map as a JSON file named after the service
//! identifier. Writes go through on every `set`.

use log::info;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SecretStoreError;
use crate::secrets::SecureCredentialStore;

pub struct FileCredentialStore {
    path: PathBuf,
    accounts: HashMap<String, String>,
}

impl FileCredentialStore {
    /// Open the store at `path`, loading any existing accounts.
    ///
    /// A missing file is an empty store, not an error.
    pub fn open(path: PathBuf) -> Result<Self, SecretStoreError> {
        let accounts = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)
                .map_err(|e| SecretStoreError::Corrupt(format!("{}: {}", path.display(), e)))?
        } else {
            HashMap::new()
        };

        Ok(Self { path, accounts })
    }

    fn persist(&self) -> Result<(), SecretStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.accounts)
            .map_err(|e| SecretStoreError::Corrupt(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SecureCredentialStore for FileCredentialStore {
    fn set(&mut self, account: &str, secret: &str) -> Result<(), SecretStoreError> {
        self.accounts.insert(account.to_string(), secret.to_string());
        self.persist()?;
        info!("Stored secret for account {}", account);
        Ok(())
    }

    fn get(&self, account: &str) -> Result<Option<String>, SecretStoreError> {
        Ok(self.accounts.get(account).cloned())
    }

    fn list_accounts(&self) -> Result<Vec<String>, SecretStoreError> {
        Ok(self.accounts.keys().cloned().collect())
    }
}
