//! In-memory credential store for tests and ephemeral sessions.

use std::collections::HashMap;

use crate::error::SecretStoreError;
use crate::secrets::SecureCredentialStore;

#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    accounts: HashMap<String, String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecureCredentialStore for MemoryCredentialStore {
    fn set(&mut self, account: &str, secret: &str) -> Result<(), SecretStoreError> {
        self.accounts.insert(account.to_string(), secret.to_string());
        Ok(())
    }

    fn get(&self, account: &str) -> Result<Option<String>, SecretStoreError> {
        Ok(self.accounts.get(account).cloned())
    }

    fn list_accounts(&self) -> Result<Vec<String>, SecretStoreError> {
        Ok(self.accounts.keys().cloned().collect())
    }
}
