//! Main logger implementation
//!
//! Any number of threads emit records; exactly one background worker formats
//! them and writes them to the configured outputs. The two sides meet at a
//! bounded queue, so a full queue blocks the emitting thread instead of
//! dropping records. A second channel carries sync requests: the worker
//! drains everything queued before the request, flushes every output and
//! replies with the flush errors.

use super::{
    call_site::{shorten_file, BacktraceResolver, CallSite, CallSiteResolver},
    content::{CommonField, Content, MessageHeader},
    context::{Context, DEFAULT_TRACE_ID_KEY},
    error::{LoggerError, Result},
    field::Field,
    formatter::Formatter,
    hostname::{default_common_fields, hostname, HostnameSource},
    metrics::LoggerMetrics,
    output::Output,
    severity::{Severities, Severity},
};
use crate::formatters::StringFormatter;
use crate::outputs;
use chrono::{DateTime, Utc};
use crossbeam_channel::{
    bounded, select, Receiver, RecvTimeoutError, SendTimeoutError, Sender, TryRecvError,
};
use parking_lot::{Mutex, RwLock};
use std::panic::{self, AssertUnwindSafe, Location};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout for logger cleanup (5 seconds)
///
/// This timeout is used when the logger is dropped without explicit shutdown.
/// For custom timeout control, use the `shutdown()` method instead.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Default number of records the queue holds before emitters block
pub const DEFAULT_MAX_QUEUE_LEN: usize = 1000;

/// Wall-clock source for record timestamps
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Receives failures that cannot be returned to any caller
pub type DiagnosticHook = Arc<dyn Fn(&LoggerError) + Send + Sync>;

/// Reply channel of one sync request
type SyncRequest = Sender<Vec<LoggerError>>;

/// Write diagnostics to stderr
pub fn stderr_diagnostics() -> DiagnosticHook {
    Arc::new(|err: &LoggerError| match err {
        LoggerError::Panicked { .. } | LoggerError::PipelineClosed => {
            eprintln!("[LOGGER CRITICAL] {}", err)
        }
        _ => eprintln!("[LOGGER ERROR] {}", err),
    })
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// State shared between the logger handle and its worker
struct Pipeline {
    outputs: Mutex<Vec<Box<dyn Output>>>,
    /// Union of the levels any current output accepts
    routable: AtomicU8,
    common_fields: RwLock<Arc<Vec<CommonField>>>,
    formatter: Box<dyn Formatter>,
    metrics: LoggerMetrics,
    diagnostics: DiagnosticHook,
}

impl Pipeline {
    fn routable_levels(outputs: &[Box<dyn Output>]) -> Severities {
        Severity::ALL
            .into_iter()
            .filter(|level| outputs.iter().any(|o| o.accepts(*level)))
            .collect()
    }

    fn replace_outputs(&self, outputs: Vec<Box<dyn Output>>) -> Vec<Box<dyn Output>> {
        let mut guard = self.outputs.lock();
        self.routable
            .store(Self::routable_levels(&outputs).bits(), Ordering::Release);
        std::mem::replace(&mut *guard, outputs)
    }

    fn is_routable(&self, level: Severity) -> bool {
        Severities::from_bits_truncate(self.routable.load(Ordering::Acquire)).contains(level)
    }

    fn report(&self, err: &LoggerError) {
        (self.diagnostics)(err);
    }

    /// Format once, then write to every output accepting the record's level
    fn write_record(&self, record: &Content) {
        let common_fields = self.common_fields.read().clone();
        let formatted = panic::catch_unwind(AssertUnwindSafe(|| {
            self.formatter.format(&common_fields, record)
        }));
        let buf = match formatted {
            Ok(buf) => buf,
            Err(payload) => {
                self.report(&LoggerError::panicked("formatter", panic_message(payload)));
                return;
            }
        };

        let mut outputs = self.outputs.lock();
        let mut has_error = false;
        for (idx, output) in outputs.iter_mut().enumerate() {
            if !output.accepts(record.level()) {
                continue;
            }
            let result = panic::catch_unwind(AssertUnwindSafe(|| output.write(&buf)));
            let err = match result {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => LoggerError::output_write(idx, output.name(), e),
                Err(payload) => {
                    LoggerError::panicked(format!("output #{}", idx), panic_message(payload))
                }
            };
            has_error = true;
            self.metrics.record_write_failure();
            self.report(&err);
        }

        if !has_error {
            self.metrics.record_written();
        }
    }

    /// Flush every output in registration order, collecting failures
    fn flush_outputs(&self) -> Vec<LoggerError> {
        let mut outputs = self.outputs.lock();
        let mut errors = Vec::new();
        for (idx, output) in outputs.iter_mut().enumerate() {
            let result = panic::catch_unwind(AssertUnwindSafe(|| output.flush()));
            let err = match result {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => e,
                Err(payload) => LoggerError::panicked("flush", panic_message(payload)),
            };
            self.metrics.record_flush_failure();
            errors.push(LoggerError::output_flush(idx, output.name(), err));
        }
        self.metrics.record_flush();
        errors
    }

    /// Process every record that was queued when the sync request arrived
    fn drain(&self, records: &Receiver<Content>) -> Result<()> {
        let mut pending = records.len();
        while pending > 0 {
            match records.try_recv() {
                Ok(record) => self.write_record(&record),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Err(LoggerError::PipelineClosed),
            }
            pending -= 1;
        }
        // Producers go away only after the last sync, so a closed queue here
        // means records can no longer arrive.
        match records.try_recv() {
            Ok(record) => {
                self.write_record(&record);
                Ok(())
            }
            Err(TryRecvError::Empty) => Ok(()),
            Err(TryRecvError::Disconnected) => Err(LoggerError::PipelineClosed),
        }
    }

    /// Answer one sync request; `false` once the queue turned out closed
    fn serve_sync(&self, records: &Receiver<Content>, reply: SyncRequest) -> bool {
        let drained = self.drain(records);
        let _ = reply.send(self.flush_outputs());
        match drained {
            Ok(()) => true,
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    fn run(&self, records: Receiver<Content>, syncs: Receiver<SyncRequest>) {
        loop {
            select! {
                recv(records) -> msg => match msg {
                    Ok(record) => self.write_record(&record),
                    // Every producer is gone; requests already waiting are
                    // still answered.
                    Err(_) => {
                        for reply in syncs.try_iter() {
                            self.serve_sync(&records, reply);
                        }
                        break;
                    }
                },
                recv(syncs) -> msg => match msg {
                    Ok(reply) => {
                        if !self.serve_sync(&records, reply) {
                            return;
                        }
                    }
                    Err(_) => {
                        for record in records.try_iter() {
                            self.write_record(&record);
                        }
                        for e in self.flush_outputs() {
                            self.report(&e);
                        }
                        break;
                    }
                },
            }
        }
    }
}

/// The logging engine
///
/// # Example
///
/// ```
/// use trace_logger::prelude::*;
///
/// let (output, buf) = outputs::buffer([Severity::Debug, Severity::Error]);
/// let logger = Logger::builder()
///     .output(output)
///     .without_common_fields()
///     .build()
///     .unwrap();
///
/// let ctx = Context::background().with_trace_id("abc");
/// logger.debug(&ctx, "x", []);
/// logger.info(&ctx, "y", []);
/// logger.error(&ctx, "z", [Field::string("user", "42")]);
///
/// assert!(logger.sync().is_empty());
/// let text = buf.contents();
/// assert!(text.contains("] x\n"));
/// assert!(!text.contains("] y"));
/// assert!(text.contains("z {user:42}"));
/// ```
pub struct Logger {
    pipeline: Arc<Pipeline>,
    trace_id_key: String,
    add_dir_header: AtomicBool,
    clock: Clock,
    resolver: Arc<dyn CallSiteResolver>,
    max_queue_len: usize,
    sender: Option<Sender<Content>>,
    sync_sender: Option<Sender<SyncRequest>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Logger {
    /// Logger with the default configuration
    ///
    /// Text formatter in local time, one stdout output for every severity,
    /// the host name as common field and a queue of
    /// [`DEFAULT_MAX_QUEUE_LEN`] records.
    pub fn new() -> Result<Self> {
        LoggerBuilder::new().build()
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn start(builder: LoggerBuilder) -> Result<Self> {
        let LoggerBuilder {
            trace_id_key,
            formatter,
            outputs,
            common_fields,
            default_common_fields: use_default_common_fields,
            add_dir_header,
            max_queue_len,
            clock,
            resolver,
            hostname_source,
            diagnostics,
        } = builder;

        let outputs = if outputs.is_empty() {
            vec![Box::new(outputs::stdout(Severities::all())) as Box<dyn Output>]
        } else {
            outputs
        };
        let common_fields = if common_fields.is_empty() && use_default_common_fields {
            default_common_fields(hostname_source)
        } else {
            common_fields
        };

        let pipeline = Arc::new(Pipeline {
            routable: AtomicU8::new(Pipeline::routable_levels(&outputs).bits()),
            outputs: Mutex::new(outputs),
            common_fields: RwLock::new(Arc::new(common_fields)),
            formatter: formatter
                .unwrap_or_else(|| Box::new(StringFormatter::default()) as Box<dyn Formatter>),
            metrics: LoggerMetrics::new(),
            diagnostics: diagnostics.unwrap_or_else(stderr_diagnostics),
        });

        let (sender, records) = bounded(max_queue_len);
        let (sync_sender, syncs) = bounded(0);
        let worker_pipeline = Arc::clone(&pipeline);
        let worker = thread::Builder::new()
            .name("trace-logger".to_string())
            .spawn(move || worker_pipeline.run(records, syncs))
            .map_err(|e| LoggerError::io_operation("starting", "cannot spawn log worker", e))?;

        Ok(Self {
            pipeline,
            trace_id_key,
            add_dir_header: AtomicBool::new(add_dir_header),
            clock: clock.unwrap_or_else(|| Arc::new(Utc::now) as Clock),
            resolver: resolver
                .unwrap_or_else(|| Arc::new(BacktraceResolver) as Arc<dyn CallSiteResolver>),
            max_queue_len,
            sender: Some(sender),
            sync_sender: Some(sync_sender),
            worker: Some(worker),
        })
    }

    fn header(
        &self,
        ctx: &Context,
        level: Severity,
        depth: usize,
        caller: &'static Location<'static>,
    ) -> MessageHeader {
        let site = self
            .resolver
            .resolve(depth, caller)
            .unwrap_or_else(CallSite::unknown);
        let add_dir = self.add_dir_header.load(Ordering::Relaxed);
        MessageHeader {
            level,
            trace_id: ctx.trace_id(&self.trace_id_key).to_string(),
            time: (self.clock)(),
            line: site.line,
            file: shorten_file(&site.file, add_dir).to_string(),
        }
    }

    /// Emit a record attributed to the frame `depth` levels above the caller
    ///
    /// `depth = 0` attributes the record to the code calling this method.
    /// Records whose level no output accepts are dropped here. A full queue
    /// blocks the calling thread until the worker catches up.
    ///
    /// With the default [`BacktraceResolver`], `depth > 0` needs line tables
    /// in the binary (debug builds, or `debug = "line-tables-only"` in the
    /// release profile) and wrappers that are not inlined. Without them the
    /// record is attributed to `???:1`.
    #[track_caller]
    pub fn log_depth(
        &self,
        ctx: &Context,
        level: Severity,
        depth: usize,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field>,
    ) {
        let caller = Location::caller();
        if !self.pipeline.is_routable(level) {
            self.pipeline.metrics.record_unrouted();
            return;
        }

        let headers = self.header(ctx, level, depth, caller);
        let content = Content::new(headers, message, fields.into_iter().collect());

        if let Some(ref sender) = self.sender {
            // Only fails once the worker is gone; nothing left to deliver to.
            if sender.send(content).is_ok() {
                self.pipeline.metrics.record_enqueued();
            }
        }
    }

    #[track_caller]
    #[inline]
    pub fn log(
        &self,
        ctx: &Context,
        level: Severity,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field>,
    ) {
        self.log_depth(ctx, level, 0, message, fields);
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self, ctx: &Context, message: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
        self.log_depth(ctx, Severity::Debug, 0, message, fields);
    }

    #[track_caller]
    #[inline]
    pub fn debug_depth(
        &self,
        ctx: &Context,
        depth: usize,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field>,
    ) {
        self.log_depth(ctx, Severity::Debug, depth, message, fields);
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, ctx: &Context, message: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
        self.log_depth(ctx, Severity::Info, 0, message, fields);
    }

    #[track_caller]
    #[inline]
    pub fn info_depth(
        &self,
        ctx: &Context,
        depth: usize,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field>,
    ) {
        self.log_depth(ctx, Severity::Info, depth, message, fields);
    }

    #[track_caller]
    #[inline]
    pub fn warning(&self, ctx: &Context, message: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
        self.log_depth(ctx, Severity::Warning, 0, message, fields);
    }

    #[track_caller]
    #[inline]
    pub fn warning_depth(
        &self,
        ctx: &Context,
        depth: usize,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field>,
    ) {
        self.log_depth(ctx, Severity::Warning, depth, message, fields);
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, ctx: &Context, message: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
        self.log_depth(ctx, Severity::Error, 0, message, fields);
    }

    #[track_caller]
    #[inline]
    pub fn error_depth(
        &self,
        ctx: &Context,
        depth: usize,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field>,
    ) {
        self.log_depth(ctx, Severity::Error, depth, message, fields);
    }

    /// Record a fatal message; the process is not terminated
    #[track_caller]
    #[inline]
    pub fn fatal(&self, ctx: &Context, message: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
        self.log_depth(ctx, Severity::Fatal, 0, message, fields);
    }

    #[track_caller]
    #[inline]
    pub fn fatal_depth(
        &self,
        ctx: &Context,
        depth: usize,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field>,
    ) {
        self.log_depth(ctx, Severity::Fatal, depth, message, fields);
    }

    /// Block until every record queued before this call is written and
    /// every output is flushed
    ///
    /// Returns one error per output whose flush failed, in registration
    /// order; an empty vector means everything reached its sink. Safe to call
    /// from several threads at once, requests are served one after another.
    /// Returns [`LoggerError::PipelineClosed`] if the worker is no longer
    /// running.
    pub fn sync(&self) -> Vec<LoggerError> {
        let Some(ref requests) = self.sync_sender else {
            return vec![LoggerError::PipelineClosed];
        };
        let (reply, response) = bounded(1);
        if requests.send(reply).is_err() {
            return vec![LoggerError::PipelineClosed];
        }
        response
            .recv()
            .unwrap_or_else(|_| vec![LoggerError::PipelineClosed])
    }

    /// Replace every output, returning the previous ones
    ///
    /// Records already queued are written to whichever outputs are installed
    /// when the worker reaches them. An empty list silences the logger.
    pub fn set_outputs(&self, outputs: Vec<Box<dyn Output>>) -> Vec<Box<dyn Output>> {
        self.pipeline.replace_outputs(outputs)
    }

    /// Replace the whole list of common fields; an empty list removes them
    pub fn set_common_fields(&self, common_fields: Vec<CommonField>) {
        *self.pipeline.common_fields.write() = Arc::new(common_fields);
    }

    pub fn common_fields(&self) -> Arc<Vec<CommonField>> {
        self.pipeline.common_fields.read().clone()
    }

    /// Whether file names keep their parent directory (`demos/main.rs` vs `main.rs`)
    pub fn set_dir_header(&self, add_dir_header: bool) {
        self.add_dir_header.store(add_dir_header, Ordering::Relaxed);
    }

    pub fn trace_id_key(&self) -> &str {
        &self.trace_id_key
    }

    /// Number of records waiting for the worker
    pub fn queue_len(&self) -> usize {
        self.sender.as_ref().map_or(0, Sender::len)
    }

    pub fn max_queue_len(&self) -> usize {
        self.max_queue_len
    }

    pub fn output_count(&self) -> usize {
        self.pipeline.outputs.lock().len()
    }

    /// Get the logger metrics for detailed observability
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.pipeline.metrics
    }

    /// Like [`sync`](Logger::sync), but gives up after `timeout`
    ///
    /// `None` means the worker did not answer in time, for instance because
    /// an output is stuck in a write or flush. The request may still be
    /// served later.
    pub fn sync_timeout(&self, timeout: Duration) -> Option<Vec<LoggerError>> {
        let deadline = Instant::now() + timeout;
        let Some(ref requests) = self.sync_sender else {
            return Some(vec![LoggerError::PipelineClosed]);
        };
        let (reply, response) = bounded(1);
        match requests.send_timeout(reply, deadline.saturating_duration_since(Instant::now())) {
            Ok(()) => {}
            Err(SendTimeoutError::Timeout(_)) => return None,
            Err(SendTimeoutError::Disconnected(_)) => {
                return Some(vec![LoggerError::PipelineClosed])
            }
        }
        match response.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok(errors) => Some(errors),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(vec![LoggerError::PipelineClosed]),
        }
    }

    /// Gracefully shutdown the logger with a custom timeout
    ///
    /// Syncs, closes the queue and waits for the worker to exit, all within
    /// `timeout`. Flush failures go to the diagnostic hook. A worker that
    /// does not finish in time is left running detached.
    ///
    /// # Returns
    ///
    /// `true` if everything was flushed and the worker finished within
    /// `timeout`, `false` otherwise
    ///
    /// # Example
    ///
    /// ```no_run
    /// use trace_logger::Logger;
    /// use std::time::Duration;
    ///
    /// let mut logger = Logger::new().unwrap();
    /// // ...
    /// if !logger.shutdown(Duration::from_secs(10)) {
    ///     eprintln!("Warning: Logger shutdown timed out");
    /// }
    /// ```
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        let Some(handle) = self.worker.take() else {
            return true;
        };

        let start = Instant::now();
        let synced = self.sync_timeout(timeout);

        // Close both channels so the worker leaves its loop
        drop(self.sender.take());
        drop(self.sync_sender.take());

        let Some(errors) = synced else {
            eprintln!(
                "[LOGGER WARNING] Log worker did not flush within {:?}. \
                 Some logs may be lost.",
                timeout
            );
            return false;
        };
        for e in &errors {
            self.pipeline.report(e);
        }
        let mut clean = errors.is_empty();

        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[LOGGER ERROR] Log worker panicked during shutdown: {:?}", e);
                    clean = false;
                }
                break;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Log worker did not finish within {:?}. \
                     Some logs may be lost.",
                    timeout
                );
                return false;
            }

            thread::sleep(Duration::from_millis(10));
        }

        clean
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use trace_logger::prelude::*;
///
/// let (output, _buf) = outputs::buffer(Severities::all());
/// let logger = Logger::builder()
///     .trace_id_key("request_id")
///     .formatter(JsonFormatter::new())
///     .output(output)
///     .common_field("instance", "test_instance")
///     .dir_header(true)
///     .max_queue_len(256)
///     .build()
///     .unwrap();
/// assert_eq!(logger.trace_id_key(), "request_id");
/// ```
pub struct LoggerBuilder {
    trace_id_key: String,
    formatter: Option<Box<dyn Formatter>>,
    outputs: Vec<Box<dyn Output>>,
    common_fields: Vec<CommonField>,
    default_common_fields: bool,
    add_dir_header: bool,
    max_queue_len: usize,
    clock: Option<Clock>,
    resolver: Option<Arc<dyn CallSiteResolver>>,
    hostname_source: HostnameSource,
    diagnostics: Option<DiagnosticHook>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            trace_id_key: DEFAULT_TRACE_ID_KEY.to_string(),
            formatter: None,
            outputs: Vec::new(),
            common_fields: Vec::new(),
            default_common_fields: true,
            add_dir_header: false,
            max_queue_len: DEFAULT_MAX_QUEUE_LEN,
            clock: None,
            resolver: None,
            hostname_source: hostname,
            diagnostics: None,
        }
    }

    /// Context key holding the trace identifier
    #[must_use = "builder methods return a new value"]
    pub fn trace_id_key(mut self, key: impl Into<String>) -> Self {
        self.trace_id_key = key.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Add an output; may be called several times
    #[must_use = "builder methods return a new value"]
    pub fn output<O: Output + 'static>(mut self, output: O) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn outputs(mut self, outputs: impl IntoIterator<Item = Box<dyn Output>>) -> Self {
        self.outputs.extend(outputs);
        self
    }

    /// Add a common field; may be called several times
    ///
    /// Any explicit common field replaces the host name default.
    #[must_use = "builder methods return a new value"]
    pub fn common_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.common_fields.push(CommonField::new(key, value));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn common_fields(mut self, fields: impl IntoIterator<Item = CommonField>) -> Self {
        self.common_fields.extend(fields);
        self
    }

    /// No common fields at all, not even the host name
    #[must_use = "builder methods return a new value"]
    pub fn without_common_fields(mut self) -> Self {
        self.common_fields.clear();
        self.default_common_fields = false;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn dir_header(mut self, add_dir_header: bool) -> Self {
        self.add_dir_header = add_dir_header;
        self
    }

    /// Queue capacity; emitters block while this many records are pending
    ///
    /// `0` makes every emit a direct hand-off to the worker.
    #[must_use = "builder methods return a new value"]
    pub fn max_queue_len(mut self, max_queue_len: usize) -> Self {
        self.max_queue_len = max_queue_len;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn call_site_resolver<R: CallSiteResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn hostname_source(mut self, source: HostnameSource) -> Self {
        self.hostname_source = source;
        self
    }

    /// Where write failures and worker faults are reported; stderr by default
    #[must_use = "builder methods return a new value"]
    pub fn on_diagnostic(mut self, hook: DiagnosticHook) -> Self {
        self.diagnostics = Some(hook);
        self
    }

    /// Build the Logger and start its worker
    pub fn build(self) -> Result<Logger> {
        Logger::start(self)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
