//! Shell command handlers
//!
//! Dispatches parsed commands against the session: the passcode gate, the
//! preference store and the stack of open folder browsers. Every handler
//! runs to completion before the next input line is read; no failure ends
//! the session.

use log::error;
use std::fs;
use std::path::Path;

use crate::browser::FolderBrowser;
use crate::error::GateError;
use crate::gate::{GateState, PasscodeGate, SubmitOutcome};
use crate::prefs::{PrefKey, PreferenceStore};
use crate::secrets::SecureCredentialStore;
use crate::shell::parser::Command;
use crate::storage;
use crate::storage::filesystem;
use crate::storage::results::ImportOutcome;

/// Represents the outcome status of executing a command.
pub enum CommandStatus {
    Success,
    Failure(String),
    CloseSession,
}

/// Struct encapsulating the full result of a command execution.
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failure(message.into()),
            message: None,
        }
    }
}

/// One interactive session: gate, preferences and the browser stack.
///
/// The stack models the navigation hierarchy; the last browser is the open
/// directory and `Up` pops back to its parent, never past the root.
pub struct Session<S: SecureCredentialStore, P: PreferenceStore> {
    gate: PasscodeGate<S>,
    prefs: P,
    root: FolderBrowser,
    stack: Vec<FolderBrowser>,
}

impl<S: SecureCredentialStore, P: PreferenceStore> Session<S, P> {
    pub fn new(gate: PasscodeGate<S>, prefs: P, root: FolderBrowser) -> Self {
        Self {
            gate,
            prefs,
            root,
            stack: Vec::new(),
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    /// Prompt shown while the gate is still closed.
    pub fn gate_prompt(&self) -> &'static str {
        match self.gate.state() {
            GateState::AwaitingCreation => "Create a passcode",
            GateState::AwaitingEntry => "Enter passcode",
            GateState::AwaitingConfirmation => "Confirm passcode",
            GateState::Unlocked => "",
        }
    }

    /// Route one input line to the gate while the vault is locked.
    pub fn handle_passcode(&mut self, candidate: &str) -> CommandResult {
        match self.gate.submit(candidate) {
            Ok(SubmitOutcome::Created) => CommandResult::success("Passcode created"),
            Ok(SubmitOutcome::NeedsConfirmation) => {
                CommandResult::success("Enter the passcode once more")
            }
            Ok(SubmitOutcome::Unlocked) => CommandResult::success("Vault unlocked"),
            // Validation and mismatch errors are user-facing, not logged.
            Err(
                e @ (GateError::InvalidLength(_)
                | GateError::Mismatch
                | GateError::ConfirmationMismatch),
            ) => CommandResult::failure(e.to_string()),
            Err(e) => {
                error!("Passcode submission failed: {}", e);
                CommandResult::failure("Credential store unavailable")
            }
        }
    }

    /// Handle a single command against the open browser.
    pub fn handle_command(&mut self, command: Command) -> CommandResult {
        match command {
            Command::List => self.handle_list(),
            Command::Mkdir(name) => self.handle_mkdir(&name),
            Command::Import(file) => self.handle_import(&file),
            Command::Open(name) => self.handle_open(&name),
            Command::Up => self.handle_up(),
            Command::Pwd => self.handle_pwd(),
            Command::Size(name) => self.handle_size(&name),
            Command::Sort(value) => self.handle_pref(PrefKey::SortAscending, value),
            Command::ShowSize(value) => self.handle_pref(PrefKey::ShowFileSize, value),
            Command::Chpass(new_passcode) => self.handle_chpass(&new_passcode),
            Command::Passcode => self.handle_show_passcode(),
            Command::Quit => CommandResult {
                status: CommandStatus::CloseSession,
                message: Some("Goodbye".to_string()),
            },
            Command::Unknown => CommandResult::failure("Unknown command"),
        }
    }

    fn current(&mut self) -> &mut FolderBrowser {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    fn handle_list(&mut self) -> CommandResult {
        let show_size = self.prefs.get_bool(PrefKey::ShowFileSize, false);
        let browser = self.stack.last_mut().unwrap_or(&mut self.root);
        let entries = browser.entries(&self.prefs);

        if entries.is_empty() {
            return CommandResult::success("(empty)");
        }

        let lines: Vec<String> = entries
            .iter()
            .map(|entry| {
                if entry.is_directory {
                    format!("{}/", entry.name)
                } else if show_size {
                    let size = storage::format_size(&entry.path);
                    if size.is_empty() {
                        entry.name.clone()
                    } else {
                        format!("{}  {} MB", entry.name, size)
                    }
                } else {
                    entry.name.clone()
                }
            })
            .collect();

        CommandResult::success(lines.join("\n"))
    }

    fn handle_mkdir(&mut self, name: &str) -> CommandResult {
        match self.current().create_folder(name) {
            Ok(_) => CommandResult::success(format!("Created {}", name)),
            // Details stay in the log; the user gets a generic failure.
            Err(_) => CommandResult::failure("Folder creation failed"),
        }
    }

    fn handle_import(&mut self, file: &str) -> CommandResult {
        // The picker collaborator: an unreadable pick behaves like a
        // cancelled one.
        if !filesystem::file_exists(Path::new(file)) {
            return CommandResult::failure("Could not read image file");
        }
        let image_bytes = match fs::read(file) {
            Ok(bytes) => bytes,
            Err(_) => return CommandResult::failure("Could not read image file"),
        };

        match self.current().import_photo(&image_bytes) {
            ImportOutcome::Stored(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                CommandResult::success(format!("Imported {}", name))
            }
            ImportOutcome::Skipped => CommandResult::success("Import skipped"),
        }
    }

    fn handle_open(&mut self, name: &str) -> CommandResult {
        if !storage::is_safe_entry_name(name) {
            return CommandResult::failure(format!("Invalid entry name: {}", name));
        }
        match self.current().open(name) {
            Ok(child) => {
                self.stack.push(child);
                CommandResult::success(format!("Opened {}", name))
            }
            Err(e) => CommandResult::failure(e.to_string()),
        }
    }

    fn handle_up(&mut self) -> CommandResult {
        if self.stack.pop().is_none() {
            return CommandResult::failure("Already at the document root");
        }
        CommandResult::success(format!("Back in {}", self.current().title()))
    }

    fn handle_pwd(&mut self) -> CommandResult {
        let path = self.current().path().display().to_string();
        CommandResult::success(path)
    }

    fn handle_size(&mut self, name: &str) -> CommandResult {
        if !storage::is_safe_entry_name(name) {
            return CommandResult::failure(format!("Invalid entry name: {}", name));
        }
        if !self.prefs.get_bool(PrefKey::ShowFileSize, false) {
            return CommandResult::success("");
        }
        let path = self.current().path().join(name);
        CommandResult::success(storage::format_size(&path))
    }

    fn handle_pref(&mut self, key: PrefKey, value: bool) -> CommandResult {
        match self.prefs.set_bool(key, value) {
            Ok(()) => CommandResult::success(format!(
                "{} {}",
                key.as_str(),
                if value { "on" } else { "off" }
            )),
            Err(e) => CommandResult::failure(e.to_string()),
        }
    }

    fn handle_chpass(&mut self, new_passcode: &str) -> CommandResult {
        match self.gate.change_passcode(new_passcode) {
            Ok(()) => CommandResult::success("Passcode changed"),
            Err(e) => CommandResult::failure(e.to_string()),
        }
    }

    fn handle_show_passcode(&mut self) -> CommandResult {
        match self.gate.current_passcode() {
            Ok(Some(passcode)) => {
                CommandResult::success(format!("Current passcode: {}", passcode))
            }
            Ok(None) => CommandResult::failure(GateError::NoStoredPasscode.to_string()),
            Err(e) => {
                error!("Cannot read stored passcode: {}", e);
                CommandResult::failure("Credential store unavailable")
            }
        }
    }
}
