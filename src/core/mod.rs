//! Core logger types and traits

pub mod call_site;
pub mod config;
pub mod content;
pub mod context;
pub mod error;
pub mod field;
pub mod formatter;
pub mod hostname;
pub mod logger;
pub mod metrics;
pub mod output;
pub mod severity;
pub mod timestamp;

pub use call_site::{BacktraceResolver, CallSite, CallSiteResolver};
pub use config::{CommonFieldConfig, FormatConfig, LoggerConfig, OutputConfig, TargetConfig};
pub use content::{CommonField, Content, MessageHeader};
pub use context::{Context, ContextValue, DEFAULT_TRACE_ID_KEY};
pub use error::{LoggerError, Result};
pub use field::{Field, FieldValue};
pub use formatter::Formatter;
pub use logger::{
    stderr_diagnostics, Clock, DiagnosticHook, Logger, LoggerBuilder, DEFAULT_MAX_QUEUE_LEN,
    DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use metrics::LoggerMetrics;
pub use output::Output;
pub use severity::{Severities, Severity};
pub use timestamp::TimestampFormat;
