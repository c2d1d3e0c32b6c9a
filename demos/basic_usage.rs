//! Basic logger usage example
//!
//! Demonstrates console outputs with per-destination severities, trace ids,
//! structured fields and the sync barrier.
//!
//! Run with: cargo run --example basic_usage

use trace_logger::prelude::*;
use trace_logger::{info, warning};

/// A helper that logs on behalf of its caller
#[inline(never)]
fn audit(logger: &Logger, ctx: &Context, action: &str) {
    // depth 1: attribute the record to whoever called `audit`
    logger.info_depth(ctx, 1, format!("audit: {}", action), []);
}

fn main() -> Result<()> {
    println!("=== Trace Logger - Basic Usage Example ===\n");

    // Debug and Info to stdout, everything at Warning and above to stderr
    let logger = Logger::builder()
        .output(outputs::stdout([Severity::Debug, Severity::Info]))
        .output(outputs::stderr([Severity::Warning, Severity::Error, Severity::Fatal]))
        .build()?;

    let ctx = Context::background().with_trace_id("4bf92f3577b34da6");

    println!("1. Logging at different levels:");
    logger.debug(&ctx, "This is a debug message", []);
    logger.info(&ctx, "This is an info message", []);
    logger.warning(&ctx, "This is a warning message", []);
    logger.error(&ctx, "This is an error message", []);
    logger.fatal(&ctx, "This is a fatal message (the process keeps running)", []);
    logger.sync();

    println!("\n2. Structured fields:");
    let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    logger.error(
        &ctx,
        "get user info failed",
        [Field::string("user", "42"), Field::any("retries", 3), Field::error(err)],
    );
    logger.sync();

    println!("\n3. Directory header and wrapper depth:");
    logger.set_dir_header(true);
    audit(&logger, &ctx, "password changed");
    logger.set_dir_header(false);
    logger.sync();

    println!("\n4. Formatting macros:");
    let port = 8080;
    info!(logger, &ctx, "Server listening on port {}", port);
    warning!(logger, &ctx, "Retry attempt {} of {}", 3, 5);

    let errors = logger.sync();
    println!("\nSync reported {} flush error(s)", errors.len());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
