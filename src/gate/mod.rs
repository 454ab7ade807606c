//! Passcode gate
//!
//! The login state machine guarding access to the vault. Creates, compares
//! and changes the passcode through the injected credential store.

pub mod machine;
pub mod results;
pub mod validator;

pub use machine::{GateState, PasscodeGate};
pub use results::SubmitOutcome;
pub use validator::{PASSCODE_LENGTH, validate_candidate};
