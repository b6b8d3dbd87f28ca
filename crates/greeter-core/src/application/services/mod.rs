//! Application services - orchestrate use cases.

pub mod greet_service;

pub use greet_service::GreetService;
