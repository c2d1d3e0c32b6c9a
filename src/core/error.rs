//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// An output's sink could not be opened
    #[error("open log file error for '{path}': {source}")]
    OutputOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a record to an output failed
    #[error("write to output #{index} ({name}) failed: {source}")]
    OutputWrite {
        index: usize,
        name: String,
        #[source]
        source: Box<LoggerError>,
    },

    /// Flushing an output failed
    #[error("flush of output #{index} ({name}) failed: {source}")]
    OutputFlush {
        index: usize,
        name: String,
        #[source]
        source: Box<LoggerError>,
    },

    /// An output or formatter panicked inside the worker
    #[error("{component} panicked: {message}")]
    Panicked { component: String, message: String },

    /// The background worker is gone and will process nothing further
    #[error("log pipeline closed unexpectedly")]
    PipelineClosed,

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn output_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::OutputOpen {
            path: path.into(),
            source,
        }
    }

    pub fn output_write(index: usize, name: impl Into<String>, source: LoggerError) -> Self {
        LoggerError::OutputWrite {
            index,
            name: name.into(),
            source: Box::new(source),
        }
    }

    pub fn output_flush(index: usize, name: impl Into<String>, source: LoggerError) -> Self {
        LoggerError::OutputFlush {
            index,
            name: name.into(),
            source: Box::new(source),
        }
    }

    pub fn panicked(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Panicked {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
