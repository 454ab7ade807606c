//! Data Vault - Entry Point
//!
//! A passcode-gated folder and photo vault over an app-private document root.

use log::{error, info};

use data_vault::config::VaultConfig;
use data_vault::shell;

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching data vault...");

    let config = match VaultConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = shell::run(&config) {
        error!("Session ended with error: {}", e);
        std::process::exit(1);
    }
}
