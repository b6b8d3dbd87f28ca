//! Compact JSON renderer.

use greeter_core::{
    application::{ApplicationError, ports::RecordRenderer},
    domain::GreetingRecord,
    error::GreeterResult,
};
use tracing::instrument;

/// Renders records as compact JSON: `{"Hello":"World","args":["a","b"]}`.
///
/// No whitespace after separators, keys in declaration order, strings
/// escaped the way `serde_json` escapes them.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a new JSON renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordRenderer for JsonRenderer {
    #[instrument(skip_all)]
    fn render(&self, record: &GreetingRecord) -> GreeterResult<String> {
        serde_json::to_string(record).map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
