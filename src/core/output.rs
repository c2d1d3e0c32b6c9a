//! Output trait for log destinations

use super::{error::Result, severity::Severity};

/// A destination the engine writes formatted records to
///
/// The engine only ever calls these methods from its single worker thread,
/// and only writes to an output whose [`accepts`](Output::accepts) returns
/// `true` for the record's level. Buffering and closing the underlying sink
/// are the output's own business.
pub trait Output: Send {
    /// Whether records at `level` belong in this output
    fn accepts(&self, level: Severity) -> bool;

    fn write(&mut self, buf: &[u8]) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    fn name(&self) -> &str {
        "output"
    }
}

impl<O: Output + ?Sized> Output for Box<O> {
    fn accepts(&self, level: Severity) -> bool {
        (**self).accepts(level)
    }

    fn write(&mut self, buf: &[u8]) -> Result<()> {
        (**self).write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
