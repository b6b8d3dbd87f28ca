//! Domain layer: the argument list, the greeting record, and `greet`.
//!
//! Nothing here performs I/O or knows about a concrete text format.

pub mod arguments;
pub mod error;
pub mod greeting;

pub use arguments::ArgumentList;
pub use error::{DomainError, ErrorCategory};
pub use greeting::{GREETING, GreetingRecord, greet};
