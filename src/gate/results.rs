//! Gate result types

/// Result of a successful passcode submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new passcode was stored; entry is now required
    Created,
    /// First entry accepted; the same passcode must be entered once more
    NeedsConfirmation,
    /// Access granted
    Unlocked,
}
