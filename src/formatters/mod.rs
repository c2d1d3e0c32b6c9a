//! Formatter implementations

pub mod json;
pub mod string;

pub use json::JsonFormatter;
pub use string::{StringFormatter, DEFAULT_TEMPLATE};

// Re-export the trait next to its implementations
pub use crate::core::Formatter;
