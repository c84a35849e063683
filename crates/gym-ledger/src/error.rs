// error.rs - Error types for the workout ledger and body-weight log.

use gym_store::StoreError;
use thiserror::Error;

/// Errors that can occur while recording training data.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The backing table could not be written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A record failed validation; nothing was written.
    #[error("invalid entry: {reason}")]
    InvalidEntry { reason: String },
}

impl LedgerError {
    /// True when the process should stop (permission errors on the table).
    pub fn is_fatal(&self) -> bool {
        match self {
            LedgerError::Store(e) => e.is_fatal(),
            LedgerError::InvalidEntry { .. } => false,
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        LedgerError::InvalidEntry {
            reason: reason.into(),
        }
    }
}
