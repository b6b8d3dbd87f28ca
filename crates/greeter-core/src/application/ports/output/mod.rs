//! Driven (output) ports - implemented by infrastructure.
//!
//! The `greeter-adapters` crate provides implementations.

use crate::domain::GreetingRecord;
use crate::error::GreeterResult;

/// Port for turning a record into text.
///
/// Implemented by:
/// - `greeter_adapters::renderer::JsonRenderer` (compact JSON)
///
/// Output must be deterministic: the same record always renders to the same
/// bytes.
#[cfg_attr(test, mockall::automock)]
pub trait RecordRenderer: Send + Sync {
    /// Render a record to its textual form, without a trailing newline.
    fn render(&self, record: &GreetingRecord) -> GreeterResult<String>;
}

/// Port for emitting one line of output.
///
/// Implemented by:
/// - `greeter_adapters::writer::StdoutWriter` (production)
/// - `greeter_adapters::writer::MemoryWriter` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait LineWriter: Send + Sync {
    /// Write `line` followed by exactly one `\n`.
    fn write_line(&self, line: &str) -> GreeterResult<()>;
}
