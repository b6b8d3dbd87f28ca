//! Infrastructure adapters for greeter.
//!
//! This crate implements the ports defined in `greeter-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod renderer;
pub mod writer;

// Re-export commonly used adapters
pub use renderer::JsonRenderer;
pub use writer::{MemoryWriter, StdoutWriter};
