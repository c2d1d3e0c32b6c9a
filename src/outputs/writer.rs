//! Buffered output over any `io::Write` sink

use crate::core::{Output, Result, Severities, Severity};
use std::io::{BufWriter, Write};

/// A set of accepted severities plus a buffered sink
///
/// Bytes reach the sink when the buffer fills or on [`Output::flush`]. The
/// sink is closed when the output is dropped.
pub struct WriterOutput<W: Write + Send> {
    name: String,
    levels: Severities,
    buffer: BufWriter<W>,
}

impl<W: Write + Send> WriterOutput<W> {
    pub fn new(levels: impl Into<Severities>, writer: W) -> Self {
        Self {
            name: "writer".to_string(),
            levels: levels.into(),
            buffer: BufWriter::new(writer),
        }
    }

    pub fn with_capacity(capacity: usize, levels: impl Into<Severities>, writer: W) -> Self {
        Self {
            name: "writer".to_string(),
            levels: levels.into(),
            buffer: BufWriter::with_capacity(capacity, writer),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn levels(&self) -> Severities {
        self.levels
    }

    pub fn get_ref(&self) -> &W {
        self.buffer.get_ref()
    }
}

impl<W: Write + Send> Output for WriterOutput<W> {
    fn accepts(&self, level: Severity) -> bool {
        self.levels.contains(level)
    }

    fn write(&mut self, buf: &[u8]) -> Result<()> {
        self.buffer.write_all(buf)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.buffer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
