//! Error types.
//!
//! Only wiring mistakes are errors. Runtime edits (focus moves, slot writes,
//! pastes) are total and never fail.

use thiserror::Error;

/// Configuration errors raised while wiring fields to a coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasscodeError {
    /// A field interpreter was built without a coordinator to drive.
    #[error("passcode field {index} must be created with a coordinator")]
    MissingCoordinator { index: usize },

    /// A field was registered at an index the coordinator does not have.
    #[error("passcode field index {index} is out of range for {total} fields")]
    FieldIndexOutOfRange { index: usize, total: usize },
}

/// Result alias for passcode wiring.
pub type Result<T> = std::result::Result<T, PasscodeError>;
