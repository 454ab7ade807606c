//! Error handling
//!
//! Domain-specific error types and centralized error management.

pub mod types;

pub use types::{
    GateError, ListError, PrefStoreError, SecretStoreError, StorageError, VaultError,
};
