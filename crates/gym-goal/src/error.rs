// error.rs - Error types for goal tracking.

use gym_store::StoreError;
use thiserror::Error;

/// Errors that can occur during goal registry operations.
#[derive(Debug, Error)]
pub enum GoalError {
    /// The goal table could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A target value was rejected; the registry is unchanged.
    #[error("invalid goal: {reason}")]
    InvalidTarget { reason: String },

    /// A listing position outside `1..=len`; the registry is unchanged.
    #[error("invalid selection: {position} (expected 1 to {len})")]
    InvalidSelection { position: usize, len: usize },
}

impl GoalError {
    /// True for failures caused by operator input rather than storage.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GoalError::InvalidTarget { .. } | GoalError::InvalidSelection { .. }
        )
    }

    /// True when the process should stop (permission errors on the table).
    pub fn is_fatal(&self) -> bool {
        match self {
            GoalError::Store(e) => e.is_fatal(),
            _ => false,
        }
    }
}
