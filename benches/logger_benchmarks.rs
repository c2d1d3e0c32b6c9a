//! Criterion benchmarks for trace_logger

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::io;
use std::panic::Location;
use std::sync::Arc;
use trace_logger::formatters::DEFAULT_TEMPLATE;
use trace_logger::prelude::*;

fn sink_logger(levels: impl Into<Severities>) -> Logger {
    Logger::builder()
        .output(WriterOutput::new(levels, io::sink()))
        .common_field("HostName", "bench-host")
        .max_queue_len(10_000)
        .build()
        .expect("logger")
}

fn sample_record(fields: Vec<Field>) -> Content {
    Content::new(
        MessageHeader {
            level: Severity::Info,
            trace_id: "4bf92f3577b34da6".to_string(),
            time: Utc
                .with_ymd_and_hms(2024, 10, 17, 12, 0, 0)
                .single()
                .expect("valid time"),
            line: 42,
            file: "handlers.rs".to_string(),
        },
        "request served",
        fields,
    )
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("builder", |b| {
        b.iter(|| {
            let logger = Logger::builder()
                .output(WriterOutput::new(Severities::all(), io::sink()))
                .without_common_fields()
                .build()
                .expect("logger");
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Emit Benchmarks
// ============================================================================

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(Severities::all());
    let ctx = Context::background().with_trace_id("4bf92f3577b34da6");

    group.bench_function("info_plain", |b| {
        b.iter(|| {
            logger.info(&ctx, black_box("Info message"), []);
        });
    });

    group.bench_function("error_with_fields", |b| {
        b.iter(|| {
            logger.error(
                &ctx,
                black_box("Error message"),
                [Field::string("user", "42"), Field::any("attempt", 3)],
            );
        });
    });

    group.bench_function("depth_1", |b| {
        b.iter(|| {
            logger.info_depth(&ctx, 1, black_box("Wrapped message"), []);
        });
    });

    logger.sync();
    group.finish();
}

fn bench_unrouted(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger([Severity::Error, Severity::Fatal]);
    let ctx = Context::background();

    group.bench_function("dropped_before_queue", |b| {
        b.iter(|| {
            logger.debug(&ctx, black_box("filtered out"), []);
        });
    });

    group.bench_function("accepted", |b| {
        b.iter(|| {
            logger.error(&ctx, black_box("routed"), []);
        });
    });

    logger.sync();
    group.finish();
}

fn bench_emit_and_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_barrier");
    group.throughput(Throughput::Elements(100));

    let logger = sink_logger(Severities::all());
    let ctx = Context::background();

    group.bench_function("100_records_then_sync", |b| {
        b.iter(|| {
            for i in 0..100 {
                logger.info(&ctx, format!("record {}", i), []);
            }
            black_box(logger.sync())
        });
    });

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");
    group.throughput(Throughput::Elements(400));

    let logger = Arc::new(sink_logger(Severities::all()));

    group.bench_function("4_threads_x_100", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        let ctx = Context::background();
                        for i in 0..100 {
                            logger.info(&ctx, format!("thread {} message {}", t, i), []);
                        }
                    })
                })
                .collect();
            for handle in handles {
                let _ = handle.join();
            }
            logger.sync()
        });
    });

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let common = vec![CommonField::new("HostName", "bench-host")];
    let record = sample_record(vec![
        Field::string("path", "/api/users"),
        Field::any("status", 200),
    ]);
    let text = StringFormatter::new(DEFAULT_TEMPLATE, TimestampFormat::default(), true);
    let json = JsonFormatter::new();

    group.bench_function("string", |b| {
        b.iter(|| black_box(text.format(&common, black_box(&record))));
    });

    group.bench_function("json", |b| {
        b.iter(|| black_box(json.format(&common, black_box(&record))));
    });

    group.finish();
}

// ============================================================================
// Call Site Benchmarks
// ============================================================================

fn bench_call_site(c: &mut Criterion) {
    let mut group = c.benchmark_group("call_site");
    let resolver = trace_logger::core::BacktraceResolver;

    group.bench_function("depth_0", |b| {
        b.iter(|| black_box(resolver.resolve(0, Location::caller())));
    });

    group.bench_function("depth_1", |b| {
        b.iter(|| black_box(resolver.resolve(1, Location::caller())));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emit,
    bench_unrouted,
    bench_emit_and_sync,
    bench_concurrent_logging,
    bench_formatters,
    bench_call_site,
);

criterion_main!(benches);
