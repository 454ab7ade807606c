//! Configuration management for the data vault
//!
//! Configuration is loaded once at startup from `config.toml` with
//! environment overrides and validated before the vault starts.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Vault configuration, loaded once during startup
#[derive(Debug, Deserialize, Clone)]
pub struct VaultConfig {
    /// Root directory under which all folders and photos live
    pub document_root: String,

    /// Directory holding the preference and credential store files
    pub state_dir: String,

    /// Service identifier scoping the credential store
    pub service_name: String,

    /// Whether unlocking requires the passcode to be entered twice in a row
    pub require_confirmation: bool,
}

impl VaultConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("DATA_VAULT"))
            .build()?;

        let config: VaultConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.document_root.is_empty() {
            return Err(ConfigError::Message("document_root cannot be empty".into()));
        }

        if self.state_dir.is_empty() {
            return Err(ConfigError::Message("state_dir cannot be empty".into()));
        }

        if self.service_name.is_empty() {
            return Err(ConfigError::Message("service_name cannot be empty".into()));
        }

        Ok(())
    }

    /// Get document root as PathBuf
    pub fn document_root_path(&self) -> PathBuf {
        PathBuf::from(&self.document_root)
    }

    /// Path of the credential store file, named after the service identifier
    pub fn credentials_file(&self) -> PathBuf {
        PathBuf::from(&self.state_dir).join(format!("{}.json", self.service_name))
    }

    /// Path of the preference store file
    pub fn preferences_file(&self) -> PathBuf {
        PathBuf::from(&self.state_dir).join("preferences.json")
    }
}
