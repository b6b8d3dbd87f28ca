//! Application layer for greeter.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GreetService)
//! - **Ports**: Interface definitions (traits) for rendering and output
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. The greeting rule lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::GreetService;

// Re-export port traits (for adapter implementation)
pub use ports::{LineWriter, RecordRenderer};

pub use error::ApplicationError;
