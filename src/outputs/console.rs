//! Console outputs

use super::writer::WriterOutput;
use crate::core::Severities;
use std::io::{self, Stderr, Stdout};

/// Buffered standard output recording `levels`
pub fn stdout(levels: impl Into<Severities>) -> WriterOutput<Stdout> {
    WriterOutput::new(levels, io::stdout()).with_name("stdout")
}

/// Buffered standard error recording `levels`
pub fn stderr(levels: impl Into<Severities>) -> WriterOutput<Stderr> {
    WriterOutput::new(levels, io::stderr()).with_name("stderr")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Output, Severity};

    #[test]
    fn test_stdout_output() {
        let mut output = stdout(Severities::all());
        assert_eq!(output.name(), "stdout");
        assert!(output.accepts(Severity::Debug));
        assert!(output.flush().is_ok());
    }

    #[test]
    fn test_stderr_output() {
        let output = stderr([Severity::Error, Severity::Fatal]);
        assert_eq!(output.name(), "stderr");
        assert!(!output.accepts(Severity::Warning));
        assert!(output.accepts(Severity::Fatal));
    }
}
