//! Record renderers.

mod json;

pub use json::JsonRenderer;
