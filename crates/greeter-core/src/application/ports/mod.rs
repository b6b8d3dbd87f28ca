//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `greeter-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `RecordRenderer`: Record-to-text rendering
//!   - `LineWriter`: Line-oriented output

pub mod output;

pub use output::{LineWriter, RecordRenderer};

#[cfg(test)]
pub use output::{MockLineWriter, MockRecordRenderer};
