//! Stress tests for the queue and the sync barrier
//!
//! These tests verify:
//! - No record is lost or reordered per producer under concurrent load
//! - A tiny queue blocks producers instead of dropping records
//! - Sync called from many threads at once keeps its guarantee
//! - A slow destination does not cost records

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tempfile::TempDir;
use trace_logger::prelude::*;

fn message_only() -> StringFormatter {
    StringFormatter::new("{MESSAGE}", TimestampFormat::default(), true)
}

/// Parse "t<thread>-<seq>" lines into per-thread sequences
fn per_thread(lines: &[String]) -> HashMap<usize, Vec<usize>> {
    let mut seen: HashMap<usize, Vec<usize>> = HashMap::new();
    for line in lines {
        let (thread, seq) = line
            .trim_start_matches('t')
            .split_once('-')
            .expect("t<thread>-<seq>");
        seen.entry(thread.parse().expect("thread id"))
            .or_default()
            .push(seq.parse().expect("sequence"));
    }
    seen
}

#[test]
fn test_concurrent_producers_lose_nothing() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 500;

    let (output, buf) = outputs::buffer(Severities::all());
    let logger = Arc::new(
        Logger::builder()
            .output(output)
            .without_common_fields()
            .formatter(message_only())
            .max_queue_len(16)
            .build()
            .expect("logger"),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let ctx = Context::background().with_trace_id(format!("worker-{}", t));
                for i in 0..PER_THREAD {
                    logger.info(&ctx, format!("t{}-{}", t, i), []);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("producer panicked");
    }

    assert!(logger.sync().is_empty());
    let lines = buf.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let seen = per_thread(&lines);
    assert_eq!(seen.len(), THREADS);
    for (thread, seqs) in seen {
        let expected: Vec<usize> = (0..PER_THREAD).collect();
        assert_eq!(seqs, expected, "records of thread {} out of order", thread);
    }
    assert_eq!(logger.metrics().enqueued(), (THREADS * PER_THREAD) as u64);
    assert_eq!(logger.metrics().written(), (THREADS * PER_THREAD) as u64);
}

/// Sink that sleeps on every write so the queue fills up
struct SlowSink {
    lines: Arc<AtomicUsize>,
}

impl Write for SlowSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        thread::sleep(Duration::from_micros(200));
        self.lines
            .fetch_add(buf.iter().filter(|b| **b == b'\n').count(), Ordering::SeqCst);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_backpressure_blocks_instead_of_dropping() {
    let lines = Arc::new(AtomicUsize::new(0));
    // Zero-capacity buffer so every record reaches the slow sink
    let output = WriterOutput::with_capacity(
        0,
        Severities::all(),
        SlowSink {
            lines: Arc::clone(&lines),
        },
    );
    let logger = Logger::builder()
        .output(output)
        .without_common_fields()
        .formatter(message_only())
        .max_queue_len(2)
        .build()
        .expect("logger");

    let ctx = Context::background();
    for i in 0..200 {
        logger.warning(&ctx, format!("record {}", i), []);
        assert!(logger.queue_len() <= 2);
    }

    assert!(logger.sync().is_empty());
    assert_eq!(lines.load(Ordering::SeqCst), 200);
    assert_eq!(logger.metrics().unrouted(), 0);
}

#[test]
fn test_rendezvous_queue() {
    let (output, buf) = outputs::buffer(Severities::all());
    let logger = Logger::builder()
        .output(output)
        .without_common_fields()
        .formatter(message_only())
        .max_queue_len(0)
        .build()
        .expect("logger");

    for i in 0..50 {
        logger.debug(&Context::background(), format!("hand-off {}", i), []);
        assert_eq!(logger.queue_len(), 0);
    }

    assert!(logger.sync().is_empty());
    assert_eq!(buf.lines().len(), 50);
}

#[test]
fn test_sync_from_many_threads() {
    const THREADS: usize = 6;
    const PER_THREAD: usize = 200;

    let (output, buf) = outputs::buffer(Severities::all());
    let logger = Arc::new(
        Logger::builder()
            .output(output)
            .without_common_fields()
            .formatter(message_only())
            .max_queue_len(64)
            .build()
            .expect("logger"),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            let buf = buf.clone();
            thread::spawn(move || {
                let ctx = Context::background();
                for i in 0..PER_THREAD {
                    let message = format!("t{}-{}", t, i);
                    logger.error(&ctx, message.clone(), []);
                    if i % 50 == 49 {
                        // Everything this thread emitted so far must be visible
                        assert!(logger.sync().is_empty());
                        let lines = buf.lines();
                        assert!(lines.contains(&message), "{} missing after sync", message);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("producer panicked");
    }

    assert!(logger.sync().is_empty());
    assert_eq!(buf.lines().len(), THREADS * PER_THREAD);
}

#[test]
fn test_file_output_under_load() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 1000;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");

    let output = outputs::file([Severity::Info, Severity::Error], &log_file).expect("open file");
    let logger = Arc::new(
        Logger::builder()
            .output(output)
            .without_common_fields()
            .formatter(message_only())
            .build()
            .expect("logger"),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let ctx = Context::background();
                for i in 0..PER_THREAD {
                    let level = if i % 2 == 0 { Severity::Info } else { Severity::Debug };
                    logger.log(&ctx, level, format!("t{}-{}", t, i), []);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("producer panicked");
    }

    assert!(logger.sync().is_empty());
    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD / 2);
    for seqs in per_thread(&lines).values() {
        assert!(seqs.windows(2).all(|w| w[0] < w[1]));
        assert!(seqs.iter().all(|s| s % 2 == 0));
    }
    assert_eq!(logger.metrics().unrouted(), (THREADS * PER_THREAD / 2) as u64);
}
