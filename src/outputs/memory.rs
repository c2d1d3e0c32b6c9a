//! In-memory output, mostly for tests

use super::writer::WriterOutput;
use crate::core::Severities;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable byte buffer; every clone sees the same bytes
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Buffered in-memory output and a handle for reading what it received
///
/// ```
/// use trace_logger::outputs;
/// use trace_logger::{Output, Severities};
///
/// let (mut output, buf) = outputs::buffer(Severities::all());
/// output.write(b"hello\n").unwrap();
/// assert!(buf.is_empty());
/// output.flush().unwrap();
/// assert_eq!(buf.contents(), "hello\n");
/// ```
pub fn buffer(levels: impl Into<Severities>) -> (WriterOutput<SharedBuffer>, SharedBuffer) {
    let buf = SharedBuffer::new();
    let output = WriterOutput::new(levels, buf.clone()).with_name("buffer");
    (output, buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Output, Severity};

    #[test]
    fn test_clones_share_contents() {
        let buf = SharedBuffer::new();
        let mut writer = buf.clone();
        writer.write_all(b"a\nb\n").unwrap();
        assert_eq!(buf.lines(), vec!["a", "b"]);
        assert_eq!(buf.len(), 4);
        buf.clear();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_buffer_output() {
        let (mut output, buf) = buffer([Severity::Warning]);
        assert!(output.accepts(Severity::Warning));
        assert!(!output.accepts(Severity::Error));
        output.write(b"warn\n").unwrap();
        output.flush().unwrap();
        assert_eq!(buf.contents(), "warn\n");
    }
}
