//! Error reporting for the `hello` executable.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//!
//! None of these change the exit status: `hello` always exits 0, so errors
//! are only reported on stderr and through tracing.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use greeter_core::error::GreeterError;

// Re-export so callers only need `use crate::error::*`.
pub use greeter_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file or override could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `greeter-core` or one of its adapters.
    #[error(transparent)]
    Core(#[from] GreeterError),
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                format!(
                    "Check the file named by {} or the default config file",
                    crate::config::CONFIG_ENV
                ),
                "Override single keys with GREETER__LOGGING__LEVEL and friends".into(),
            ],
            Self::Core(core_err) => core_err.suggestions(),
        }
    }

    /// Get the error category, which picks the log level in [`Self::log`].
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Output => ErrorCategory::Output,
                // `run` never rebuilds records, so a domain error here is a bug.
                CoreCategory::Validation | CoreCategory::Internal => ErrorCategory::Internal,
            },
        }
    }

    /// `true` when stdout was closed by its reader.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Core(core) if core.is_broken_pipe())
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        output
    }

    /// Same report as [`Self::format_colored`], without ANSI escapes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out
    }

    /// Log the error using tracing.
    ///
    /// Configuration errors are recovered from (defaults are used), so they
    /// log as warnings.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::Configuration => {
                tracing::warn!(error = %self, "using default configuration")
            }
            ErrorCategory::Output => tracing::error!("Output error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration error.
    Configuration,
    /// Stdout could not be written.
    Output,
    /// Rendering failed or a writer lock was poisoned.
    Internal,
}
