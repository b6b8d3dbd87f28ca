//! Greeter Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `hello`
//! program: it turns the process arguments into a greeting record and hands
//! the record to whatever renderer and writer the caller injects.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           greeter-cli (hello)           │
//! │     (Captures argv, wires adapters)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (GreetService)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (RecordRenderer, LineWriter)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    greeter-adapters (Infrastructure)    │
//! │ (JsonRenderer, StdoutWriter, Memory...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ArgumentList, GreetingRecord, greet)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use greeter_core::{application::GreetService, domain::ArgumentList};
//!
//! let args = ArgumentList::from_os_args(std::env::args_os());
//!
//! // renderer: impl RecordRenderer, writer: impl LineWriter
//! let service = GreetService::new(renderer, writer);
//! service.run(args).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GreetService,
        ports::{LineWriter, RecordRenderer},
    };
    pub use crate::domain::{ArgumentList, GREETING, GreetingRecord, greet};
    pub use crate::error::{GreeterError, GreeterResult};
}
