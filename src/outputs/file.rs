//! File output

use super::writer::WriterOutput;
use crate::core::{LoggerError, Result, Severities};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Buffered file output, opened for append and created when missing
///
/// Failing to open the file is reported here, before the output ever reaches
/// a logger.
pub fn file(levels: impl Into<Severities>, path: impl AsRef<Path>) -> Result<WriterOutput<File>> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::output_open(path.display().to_string(), e))?;
    Ok(WriterOutput::new(levels, file).with_name(path.display().to_string()))
}
