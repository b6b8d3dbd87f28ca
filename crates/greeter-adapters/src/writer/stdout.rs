//! Process stdout adapter.

use std::io::{self, Write};

use greeter_core::{
    application::{ApplicationError, ports::LineWriter},
    error::GreeterResult,
};
use tracing::{instrument, trace};

/// Writes lines to the process's standard output.
///
/// Each call locks stdout, writes the line plus `\n`, and flushes, so the
/// line is complete before the process exits.
pub struct StdoutWriter;

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineWriter for StdoutWriter {
    #[instrument(skip_all, fields(bytes = line.len()))]
    fn write_line(&self, line: &str) -> GreeterResult<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
            .and_then(|()| out.flush())
            .map_err(|e| ApplicationError::write_failed(&e))?;
        trace!("line flushed to stdout");
        Ok(())
    }
}
