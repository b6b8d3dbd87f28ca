//! In-memory line writer for testing.

use std::sync::{Arc, RwLock};

use greeter_core::{
    application::{ApplicationError, ports::LineWriter},
    error::GreeterResult,
};

/// Collects written lines in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a service
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    inner: Arc<RwLock<String>>,
}

impl MemoryWriter {
    /// Create a new empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, newlines included.
    pub fn contents(&self) -> String {
        self.inner
            .read()
            .map(|buf| buf.clone())
            .unwrap_or_default()
    }

    /// The written lines, without their terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut buf) = self.inner.write() {
            buf.clear();
        }
    }
}

impl LineWriter for MemoryWriter {
    fn write_line(&self, line: &str) -> GreeterResult<()> {
        let mut buf = self
            .inner
            .write()
            .map_err(|_| ApplicationError::WriterLockError)?;
        buf.push_str(line);
        buf.push('\n');
        Ok(())
    }
}
