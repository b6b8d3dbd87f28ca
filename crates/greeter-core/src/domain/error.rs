use thiserror::Error;

/// Root domain error type.
///
/// The greeting itself cannot fail; the only domain rule that can be broken
/// is a foreign record carrying the wrong greeting.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("greeting record must say Hello to \"World\", found \"{found}\"")]
    UnexpectedGreeting { found: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnexpectedGreeting { found } => vec![
                format!("The record greets \"{found}\""),
                "Only records produced by `hello` can be read back".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnexpectedGreeting { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
