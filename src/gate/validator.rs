//! Passcode validation
//!
//! Length validation runs before any credential store access; rejected
//! candidates never touch the store and never change gate state.

use crate::error::GateError;

/// Required passcode length in characters
pub const PASSCODE_LENGTH: usize = 4;

/// Validates that a candidate has exactly [`PASSCODE_LENGTH`] characters.
pub fn validate_candidate(candidate: &str) -> Result<(), GateError> {
    let len = candidate.chars().count();
    if len != PASSCODE_LENGTH {
        return Err(GateError::InvalidLength(len));
    }
    Ok(())
}
