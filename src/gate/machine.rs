//! Gate state machine
//!
//! Explicit state enum, independent of any display string. The optional
//! confirmation step (passcode entered twice in a row before unlock) is
//! driven by configuration.

use log::info;

use crate::error::GateError;
use crate::gate::results::SubmitOutcome;
use crate::gate::validator::validate_candidate;
use crate::secrets::{PASSCODE_ACCOUNT, SecureCredentialStore};

/// State of the passcode gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No passcode is stored yet; the next valid submission creates one
    AwaitingCreation,
    /// A passcode exists and must be entered
    AwaitingEntry,
    /// First entry matched; the same passcode must be entered again
    AwaitingConfirmation,
    /// Access granted (terminal)
    Unlocked,
}

/// The login state machine guarding vault access.
pub struct PasscodeGate<S: SecureCredentialStore> {
    store: S,
    require_confirmation: bool,
    state: GateState,
}

impl<S: SecureCredentialStore> PasscodeGate<S> {
    /// Build a gate over the given credential store.
    ///
    /// The initial state is derived from the store: no accounts means no
    /// passcode has ever been created.
    pub fn new(store: S, require_confirmation: bool) -> Result<Self, GateError> {
        let state = if store.list_accounts().map_err(GateError::Store)?.is_empty() {
            GateState::AwaitingCreation
        } else {
            GateState::AwaitingEntry
        };

        Ok(Self {
            store,
            require_confirmation,
            state,
        })
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// Submit a passcode candidate and advance the state machine.
    ///
    /// Candidates of the wrong length are rejected before the store is
    /// consulted and leave the state unchanged. A mismatch in
    /// `AwaitingEntry` stays there; a mismatch in `AwaitingConfirmation`
    /// falls back to `AwaitingEntry`. No submission is retried
    /// automatically.
    pub fn submit(&mut self, candidate: &str) -> Result<SubmitOutcome, GateError> {
        validate_candidate(candidate)?;

        match self.state {
            GateState::AwaitingCreation => {
                self.store
                    .set(PASSCODE_ACCOUNT, candidate)
                    .map_err(GateError::Store)?;
                self.state = GateState::AwaitingEntry;
                info!("Passcode created");
                Ok(SubmitOutcome::Created)
            }
            GateState::AwaitingEntry => {
                if self.matches(candidate)? {
                    if self.require_confirmation {
                        self.state = GateState::AwaitingConfirmation;
                        Ok(SubmitOutcome::NeedsConfirmation)
                    } else {
                        self.state = GateState::Unlocked;
                        info!("Vault unlocked");
                        Ok(SubmitOutcome::Unlocked)
                    }
                } else {
                    Err(GateError::Mismatch)
                }
            }
            GateState::AwaitingConfirmation => {
                if self.matches(candidate)? {
                    self.state = GateState::Unlocked;
                    info!("Vault unlocked");
                    Ok(SubmitOutcome::Unlocked)
                } else {
                    self.state = GateState::AwaitingEntry;
                    Err(GateError::ConfirmationMismatch)
                }
            }
            GateState::Unlocked => Ok(SubmitOutcome::Unlocked),
        }
    }

    /// Replace the stored passcode. Gate state is unaffected.
    pub fn change_passcode(&mut self, new_passcode: &str) -> Result<(), GateError> {
        validate_candidate(new_passcode)?;
        self.store
            .set(PASSCODE_ACCOUNT, new_passcode)
            .map_err(GateError::Store)?;
        info!("Passcode changed");
        Ok(())
    }

    /// The currently stored passcode, for the settings display.
    pub fn current_passcode(&self) -> Result<Option<String>, GateError> {
        self.store.get(PASSCODE_ACCOUNT).map_err(GateError::Store)
    }

    fn matches(&self, candidate: &str) -> Result<bool, GateError> {
        match self.store.get(PASSCODE_ACCOUNT).map_err(GateError::Store)? {
            Some(stored) => Ok(stored == candidate),
            None => Err(GateError::NoStoredPasscode),
        }
    }
}
