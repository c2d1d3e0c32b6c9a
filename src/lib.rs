//! # Trace Logger
//!
//! An in-process logging engine that decouples the threads producing log
//! records from the sinks writing them.
//!
//! ## Features
//!
//! - **Asynchronous**: records go through a bounded queue to a single
//!   background worker; a full queue applies backpressure instead of dropping
//! - **Per-destination routing**: every output declares exactly which
//!   severities it accepts, with no implicit ordering between levels
//! - **Trace aware**: the trace id is read from a request [`Context`]
//! - **Flush barrier**: [`Logger::sync`] returns once everything emitted
//!   before it has been written and flushed, with per-output errors
//! - **Pluggable**: custom [`Formatter`]s and [`Output`]s
//!
//! ## Example
//!
//! ```
//! use trace_logger::prelude::*;
//!
//! let (output, buf) = outputs::buffer([Severity::Info, Severity::Error]);
//! let logger = Logger::builder()
//!     .output(output)
//!     .common_field("instance", "api-1")
//!     .build()
//!     .unwrap();
//!
//! let ctx = Context::background().with_trace_id("4bf92f35");
//! logger.info(&ctx, "user signed in", [Field::string("user", "42")]);
//!
//! assert!(logger.sync().is_empty());
//! assert!(buf.contents().contains("4bf92f35"));
//! ```

pub mod core;
pub mod formatters;
pub mod global;
pub mod macros;
pub mod outputs;

pub mod prelude {
    pub use crate::core::{
        CallSite, CallSiteResolver, CommonField, Content, Context, Field, Formatter, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, MessageHeader, Output, Result,
        Severities, Severity, TimestampFormat, DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::formatters::{JsonFormatter, StringFormatter};
    pub use crate::outputs::{self, SharedBuffer, WriterOutput};
}

pub use crate::core::{
    CallSite, CallSiteResolver, CommonField, Content, Context, ContextValue, DiagnosticHook, Field,
    FieldValue, Formatter, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
    MessageHeader, Output, Result, Severities, Severity, TimestampFormat, DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use crate::formatters::{JsonFormatter, StringFormatter};
pub use crate::outputs::{SharedBuffer, WriterOutput};
