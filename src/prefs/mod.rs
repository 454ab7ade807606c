//! User preference storage
//!
//! Boolean settings persisted across launches. Unset keys read as their
//! caller-supplied default until first-launch initialization turns the two
//! user-visible switches on.

pub mod file_store;
pub mod memory;

pub use file_store::FilePreferenceStore;
pub use memory::MemoryPreferenceStore;

use crate::error::PrefStoreError;

/// Recognized preference keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefKey {
    /// Sort directory listings ascending (true) or descending (false)
    SortAscending,
    /// Show the size of stored photos alongside their name
    ShowFileSize,
    /// Set once the first-launch defaults have been applied
    FirstLaunchDone,
}

impl PrefKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrefKey::SortAscending => "sortAscending",
            PrefKey::ShowFileSize => "showFileSize",
            PrefKey::FirstLaunchDone => "firstLaunchDone",
        }
    }
}

/// Capability interface over a persistent boolean settings store.
pub trait PreferenceStore {
    /// Read a flag, falling back to `default` when the key was never set.
    fn get_bool(&self, key: PrefKey, default: bool) -> bool;

    /// Set a flag, persisting it immediately.
    fn set_bool(&mut self, key: PrefKey, value: bool) -> Result<(), PrefStoreError>;
}

/// Apply first-launch defaults: both user-visible switches start on.
///
/// Idempotent; does nothing once `FirstLaunchDone` has been recorded.
pub fn init_first_launch(store: &mut dyn PreferenceStore) -> Result<(), PrefStoreError> {
    if store.get_bool(PrefKey::FirstLaunchDone, false) {
        return Ok(());
    }

    store.set_bool(PrefKey::SortAscending, true)?;
    store.set_bool(PrefKey::ShowFileSize, true)?;
    store.set_bool(PrefKey::FirstLaunchDone, true)?;
    log::info!("Applied first-launch preference defaults");
    Ok(())
}
