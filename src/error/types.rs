//! Error types
//!
//! Defines domain-specific error types for each module of the vault.

use std::fmt;
use std::io;

use crate::gate::PASSCODE_LENGTH;

/// Passcode gate errors
#[derive(Debug)]
pub enum GateError {
    /// Candidate had the wrong number of characters; the store was not consulted
    InvalidLength(usize),
    /// Candidate does not match the stored passcode
    Mismatch,
    /// Second entry of the two-step flow does not match
    ConfirmationMismatch,
    /// Entry was attempted while no passcode is stored
    NoStoredPasscode,
    /// Underlying credential store failure
    Store(SecretStoreError),
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::InvalidLength(len) => write!(
                f,
                "Passcode must be exactly {} characters, got {}",
                PASSCODE_LENGTH, len
            ),
            GateError::Mismatch => write!(f, "Wrong passcode"),
            GateError::ConfirmationMismatch => write!(f, "Confirmation does not match"),
            GateError::NoStoredPasscode => write!(f, "No passcode has been created yet"),
            GateError::Store(e) => write!(f, "Credential store error: {}", e),
        }
    }
}

impl std::error::Error for GateError {}

/// Credential store errors
#[derive(Debug)]
pub enum SecretStoreError {
    IoError(io::Error),
    Corrupt(String),
}

impl fmt::Display for SecretStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretStoreError::IoError(e) => write!(f, "IO error: {}", e),
            SecretStoreError::Corrupt(p) => write!(f, "Corrupt credential store: {}", p),
        }
    }
}

impl std::error::Error for SecretStoreError {}

impl From<io::Error> for SecretStoreError {
    fn from(error: io::Error) -> Self {
        SecretStoreError::IoError(error)
    }
}

/// Preference store errors
#[derive(Debug)]
pub enum PrefStoreError {
    IoError(io::Error),
    Corrupt(String),
}

impl fmt::Display for PrefStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefStoreError::IoError(e) => write!(f, "IO error: {}", e),
            PrefStoreError::Corrupt(p) => write!(f, "Corrupt preference store: {}", p),
        }
    }
}

impl std::error::Error for PrefStoreError {}

impl From<io::Error> for PrefStoreError {
    fn from(error: io::Error) -> Self {
        PrefStoreError::IoError(error)
    }
}

/// Listing module errors
#[derive(Debug)]
pub enum ListError {
    /// Directory could not be enumerated (missing path or insufficient permission)
    Unreadable { path: String, source: io::Error },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Unreadable { path, source } => {
                write!(f, "Cannot read directory {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for ListError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    /// Folder creation was rejected by the filesystem
    CreationFailed { path: String, source: io::Error },
    DirectoryNotFound(String),
    NotADirectory(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::CreationFailed { path, source } => {
                write!(f, "Failed to create {}: {}", path, source)
            }
            StorageError::DirectoryNotFound(p) => write!(f, "Directory not found: {}", p),
            StorageError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
        }
    }
}

impl std::error::Error for StorageError {}

/// General vault error that encompasses all error types
#[derive(Debug)]
pub enum VaultError {
    Gate(GateError),
    Secrets(SecretStoreError),
    Prefs(PrefStoreError),
    List(ListError),
    Storage(StorageError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::Gate(e) => write!(f, "Gate error: {}", e),
            VaultError::Secrets(e) => write!(f, "Credential store error: {}", e),
            VaultError::Prefs(e) => write!(f, "Preference store error: {}", e),
            VaultError::List(e) => write!(f, "Listing error: {}", e),
            VaultError::Storage(e) => write!(f, "Storage error: {}", e),
            VaultError::Config(e) => write!(f, "Configuration error: {}", e),
            VaultError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for VaultError {}

// Implement conversions from specific errors to VaultError
impl From<GateError> for VaultError {
    fn from(error: GateError) -> Self {
        VaultError::Gate(error)
    }
}

impl From<SecretStoreError> for VaultError {
    fn from(error: SecretStoreError) -> Self {
        VaultError::Secrets(error)
    }
}

impl From<PrefStoreError> for VaultError {
    fn from(error: PrefStoreError) -> Self {
        VaultError::Prefs(error)
    }
}

impl From<ListError> for VaultError {
    fn from(error: ListError) -> Self {
        VaultError::List(error)
    }
}

impl From<StorageError> for VaultError {
    fn from(error: StorageError) -> Self {
        VaultError::Storage(error)
    }
}

impl From<config::ConfigError> for VaultError {
    fn from(error: config::ConfigError) -> Self {
        VaultError::Config(error)
    }
}

impl From<io::Error> for VaultError {
    fn from(error: io::Error) -> Self {
        VaultError::IoError(error)
    }
}
