//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Records emitted
//! through a macro are attributed to the line of the macro invocation and
//! carry no structured fields; use the logger methods directly to attach
//! [`Field`](crate::Field)s.
//!
//! # Examples
//!
//! ```
//! use trace_logger::prelude::*;
//! use trace_logger::info;
//!
//! let logger = Logger::new().unwrap();
//! let ctx = Context::background().with_trace_id("7f3a");
//!
//! // Basic logging
//! info!(logger, &ctx, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, &ctx, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use trace_logger::prelude::*;
/// # let logger = Logger::new().unwrap();
/// # let ctx = Context::background();
/// use trace_logger::log;
/// log!(logger, &ctx, Severity::Info, "Simple message");
/// log!(logger, &ctx, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $ctx:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($ctx, $level, format!($($arg)+), ::std::iter::empty::<$crate::Field>())
    };
}

/// Log a debug-level message.
///
/// ```
/// # use trace_logger::prelude::*;
/// # let logger = Logger::new().unwrap();
/// # let ctx = Context::background();
/// use trace_logger::debug;
/// debug!(logger, &ctx, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $ctx, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $ctx, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use trace_logger::prelude::*;
/// # let logger = Logger::new().unwrap();
/// # let ctx = Context::background();
/// use trace_logger::warning;
/// warning!(logger, &ctx, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $ctx, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $ctx, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fatal-level message. The process keeps running.
///
/// ```
/// # use trace_logger::prelude::*;
/// # let logger = Logger::new().unwrap();
/// # let ctx = Context::background();
/// use trace_logger::fatal;
/// fatal!(logger, &ctx, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $ctx, $crate::Severity::Fatal, $($arg)+)
    };
}
