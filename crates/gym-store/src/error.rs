// error.rs - Error types for the tabular store.

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing a table.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file does not exist yet.
    #[error("table not found: {path}")]
    Missing { path: PathBuf },

    /// A file system operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The delimited data could not be read or written.
    #[error("malformed table at {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    /// The header row lacks columns the record schema requires.
    #[error("table {path} is missing column(s): {}", .missing.join(", "))]
    Schema { path: PathBuf, missing: Vec<String> },
}

impl StoreError {
    /// True when the failure cannot be recovered by retrying or falling back
    /// to an empty table. Only permission errors qualify.
    pub fn is_fatal(&self) -> bool {
        match self {
            StoreError::Io { source, .. } => source.kind() == ErrorKind::PermissionDenied,
            StoreError::Csv { source, .. } => match source.kind() {
                csv::ErrorKind::Io(e) => e.kind() == ErrorKind::PermissionDenied,
                _ => false,
            },
            StoreError::Missing { .. } | StoreError::Schema { .. } => false,
        }
    }
}
