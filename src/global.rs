//! Process-scoped default logger
//!
//! Libraries deep in a call stack often have no logger handed to them. This
//! module holds one optional [`Logger`] for the whole process and exposes
//! free functions that forward to it. Nothing is installed until
//! [`init`] or [`init_default`] runs; until then every wrapper is a no-op
//! and [`sync`] reports nothing.
//!
//! ```
//! use trace_logger::{global, outputs, Context, Logger, Severities};
//!
//! let (output, buf) = outputs::buffer(Severities::all());
//! global::init(Logger::builder().output(output).build().unwrap());
//!
//! global::info(&Context::background(), "ready", []);
//! assert!(global::sync().is_empty());
//! assert!(buf.contents().contains("ready"));
//!
//! global::shutdown();
//! ```

use crate::core::{CommonField, Context, Field, Logger, LoggerError, Output, Result, Severity};
use parking_lot::{const_rwlock, RwLock};
use std::sync::Arc;

static LOGGER: RwLock<Option<Arc<Logger>>> = const_rwlock(None);

fn current() -> Option<Arc<Logger>> {
    LOGGER.read().clone()
}

/// Install `logger` as the process logger, returning the previous one
///
/// The previous logger keeps running until its last handle is dropped.
pub fn init(logger: Logger) -> Option<Arc<Logger>> {
    LOGGER.write().replace(Arc::new(logger))
}

/// Install a logger with the default configuration
pub fn init_default() -> Result<Option<Arc<Logger>>> {
    Ok(init(Logger::new()?))
}

/// Sync and uninstall the process logger
///
/// Returns the flush errors of the final sync. The worker stops once the
/// last outstanding handle from [`logger`] is dropped.
pub fn shutdown() -> Vec<LoggerError> {
    // Released before syncing; dropping the last handle joins the worker.
    let taken = LOGGER.write().take();
    taken.map(|logger| logger.sync()).unwrap_or_default()
}

/// Handle to the installed logger, if any
pub fn logger() -> Option<Arc<Logger>> {
    current()
}

pub fn is_initialized() -> bool {
    LOGGER.read().is_some()
}

pub fn set_outputs(outputs: Vec<Box<dyn Output>>) {
    if let Some(logger) = current() {
        logger.set_outputs(outputs);
    }
}

pub fn set_common_fields(common_fields: Vec<CommonField>) {
    if let Some(logger) = current() {
        logger.set_common_fields(common_fields);
    }
}

pub fn set_dir_header(add_dir_header: bool) {
    if let Some(logger) = current() {
        logger.set_dir_header(add_dir_header);
    }
}

/// Wait for every queued record to be written and flushed
pub fn sync() -> Vec<LoggerError> {
    current().map(|logger| logger.sync()).unwrap_or_default()
}

/// Emit through the installed logger; `depth = 0` is the caller of this function
///
/// Deeper frames need line tables in the binary, see [`Logger::log_depth`].
#[track_caller]
pub fn log_depth(
    ctx: &Context,
    level: Severity,
    depth: usize,
    message: impl Into<String>,
    fields: impl IntoIterator<Item = Field>,
) {
    if let Some(logger) = current() {
        logger.log_depth(ctx, level, depth, message, fields);
    }
}

#[track_caller]
pub fn debug(ctx: &Context, message: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
    log_depth(ctx, Severity::Debug, 0, message, fields);
}

#[track_caller]
pub fn debug_depth(
    ctx: &Context,
    depth: usize,
    message: impl Into<String>,
    fields: impl IntoIterator<Item = Field>,
) {
    log_depth(ctx, Severity::Debug, depth, message, fields);
}

#[track_caller]
pub fn info(ctx: &Context, message: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
    log_depth(ctx, Severity::Info, 0, message, fields);
}

#[track_caller]
pub fn info_depth(
    ctx: &Context,
    depth: usize,
    message: impl Into<String>,
    fields: impl IntoIterator<Item = Field>,
) {
    log_depth(ctx, Severity::Info, depth, message, fields);
}

#[track_caller]
pub fn warning(ctx: &Context, message: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
    log_depth(ctx, Severity::Warning, 0, message, fields);
}

#[track_caller]
pub fn warning_depth(
    ctx: &Context,
    depth: usize,
    message: impl Into<String>,
    fields: impl IntoIterator<Item = Field>,
) {
    log_depth(ctx, Severity::Warning, depth, message, fields);
}

#[track_caller]
pub fn error(ctx: &Context, message: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
    log_depth(ctx, Severity::Error, 0, message, fields);
}

#[track_caller]
pub fn error_depth(
    ctx: &Context,
    depth: usize,
    message: impl Into<String>,
    fields: impl IntoIterator<Item = Field>,
) {
    log_depth(ctx, Severity::Error, depth, message, fields);
}

#[track_caller]
pub fn fatal(ctx: &Context, message: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
    log_depth(ctx, Severity::Fatal, 0, message, fields);
}

#[track_caller]
pub fn fatal_depth(
    ctx: &Context,
    depth: usize,
    message: impl Into<String>,
    fields: impl IntoIterator<Item = Field>,
) {
    log_depth(ctx, Severity::Fatal, depth, message, fields);
}
