pub mod browser;
pub mod config;
pub mod error;
pub mod gate;
pub mod listing;
pub mod prefs;
pub mod secrets;
pub mod shell;
pub mod storage;

pub use browser::FolderBrowser;
pub use gate::PasscodeGate;
