//! Interactive shell
//!
//! The line-based UI collaborator driving the logical core: every input
//! line is handled synchronously and to completion before the next one is
//! read. While the gate is locked, each line is a passcode submission;
//! afterwards, lines are parsed as browser commands.

pub mod handlers;
pub mod parser;

pub use handlers::{CommandResult, CommandStatus, Session};
pub use parser::{Command, parse_command};

use log::info;
use std::io::{self, BufRead, Write};

use crate::browser::FolderBrowser;
use crate::config::VaultConfig;
use crate::error::VaultError;
use crate::gate::PasscodeGate;
use crate::prefs::{self, FilePreferenceStore};
use crate::secrets::FileCredentialStore;

/// Run an interactive session over stdin/stdout.
pub fn run(config: &VaultConfig) -> Result<(), VaultError> {
    let credentials = FileCredentialStore::open(config.credentials_file())?;
    let mut preferences = FilePreferenceStore::open(config.preferences_file())?;
    prefs::init_first_launch(&mut preferences)?;

    let gate = PasscodeGate::new(credentials, config.require_confirmation)?;
    let root = FolderBrowser::open_root(config.document_root_path())?;
    let mut session = Session::new(gate, preferences, root);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if session.is_unlocked() {
            write!(stdout, "> ")?;
        } else {
            write!(stdout, "{}: ", session.gate_prompt())?;
        }
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            info!("Input closed, ending session");
            return Ok(());
        }

        let result = if session.is_unlocked() {
            session.handle_command(parse_command(&line))
        } else {
            session.handle_passcode(line.trim())
        };

        if let Some(message) = &result.message {
            if !message.is_empty() {
                writeln!(stdout, "{}", message)?;
            }
        }

        match result.status {
            CommandStatus::Success => {}
            CommandStatus::Failure(reason) => writeln!(stdout, "{}", reason)?,
            CommandStatus::CloseSession => {
                info!("Session closed by user");
                return Ok(());
            }
        }
    }
}
