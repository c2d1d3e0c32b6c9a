//! Output implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod writer;

pub use console::{stderr, stdout};
pub use file::file;
pub use memory::{buffer, SharedBuffer};
pub use writer::WriterOutput;

// Re-export the trait next to its implementations
pub use crate::core::Output;
