//! Application layer errors.
//!
//! These errors represent failures in the ports, not in the greeting itself.

use std::io::ErrorKind;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised while rendering or emitting a record.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The renderer could not turn the record into text.
    #[error("Record rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// The rendered line could not be written out.
    #[error("Writing output failed: {reason}")]
    WriteFailed { kind: ErrorKind, reason: String },

    /// A writer's shared buffer was poisoned by a panicking thread.
    #[error("Output buffer lock poisoned")]
    WriterLockError,
}

impl ApplicationError {
    /// Wrap an I/O error from an output adapter.
    pub fn write_failed(err: &std::io::Error) -> Self {
        Self::WriteFailed {
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { reason } => vec![format!("Renderer reported: {reason}")],
            Self::WriteFailed { kind, .. } => vec![
                format!("Standard output rejected the write ({kind})"),
                "Check that stdout is open and the target has free space".into(),
            ],
            Self::WriterLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderingFailed { .. } | Self::WriterLockError => ErrorCategory::Internal,
            Self::WriteFailed { .. } => ErrorCategory::Output,
        }
    }
}
