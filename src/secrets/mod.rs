//! Secure credential storage
//!
//! Opaque account-to-secret store scoped to a service identifier. The vault
//! only ever stores the single passcode under [`PASSCODE_ACCOUNT`]; the file
//! backed implementation stands in for a platform keychain.

pub mod file_store;
pub mod memory;

pub use file_store::FileCredentialStore;
pub use memory::MemoryCredentialStore;

use crate::error::SecretStoreError;

/// Account key under which the single system-wide passcode is stored.
pub const PASSCODE_ACCOUNT: &str = "User";

/// Capability interface over an encrypted secret store.
///
/// Values are opaque to the rest of the crate; nothing outside an
/// implementation inspects how or where secrets are kept.
pub trait SecureCredentialStore {
    /// Store a secret under the given account, replacing any previous value.
    fn set(&mut self, account: &str, secret: &str) -> Result<(), SecretStoreError>;

    /// Read the secret stored under the given account, if any.
    fn get(&self, account: &str) -> Result<Option<String>, SecretStoreError>;

    /// All accounts currently holding a secret.
    fn list_accounts(&self) -> Result<Vec<String>, SecretStoreError>;
}
