//! Unified error handling for Greeter Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Greeter Core operations.
///
/// `greet` itself never fails; these errors come from the ports (rendering,
/// writing) and from rebuilding records out of foreign data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GreeterError {
    /// Errors from the domain layer (invariant violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (port failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl GreeterError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the failure was the reader of stdout going away.
    ///
    /// The CLI treats this as a normal exit (`hello | head -c0`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::WriteFailed {
                kind: std::io::ErrorKind::BrokenPipe,
                ..
            })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Output,
    Internal,
}

/// Convenient result type alias.
pub type GreeterResult<T> = Result<T, GreeterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn broken_pipe_is_detected() {
        let err: GreeterError = ApplicationError::WriteFailed {
            kind: ErrorKind::BrokenPipe,
            reason: "pipe closed".into(),
        }
        .into();
        assert!(err.is_broken_pipe());
        assert_eq!(err.category(), ErrorCategory::Output);
    }

    #[test]
    fn other_write_failures_are_not_broken_pipe() {
        let err: GreeterError = ApplicationError::WriteFailed {
            kind: ErrorKind::PermissionDenied,
            reason: "denied".into(),
        }
        .into();
        assert!(!err.is_broken_pipe());
    }

    #[test]
    fn domain_errors_are_validation() {
        let err: GreeterError = DomainError::UnexpectedGreeting {
            found: "Bob".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
