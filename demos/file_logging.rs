//! File logging example
//!
//! Demonstrates file outputs, reconfiguration at runtime and loading a logger
//! from a JSON configuration document.
//!
//! Run with: cargo run --example file_logging

use std::fs;
use std::time::Duration;
use trace_logger::core::config::LoggerConfig;
use trace_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Trace Logger - File Logging Example ===\n");

    let log_dir = std::env::temp_dir().join("trace_logger_demo");
    fs::create_dir_all(&log_dir)?;
    let app_log = log_dir.join("app.log");
    let error_log = log_dir.join("errors.log");

    // Example 1: separate files per severity
    println!("1. Writing to {} and {}", app_log.display(), error_log.display());
    let mut logger = Logger::builder()
        .output(outputs::file([Severity::Debug, Severity::Info, Severity::Warning], &app_log)?)
        .output(outputs::file([Severity::Error, Severity::Fatal], &error_log)?)
        .common_field("instance", "demo-1")
        .build()?;

    let ctx = Context::background().with_trace_id("file-demo");
    for i in 0..5 {
        logger.info(&ctx, format!("processing batch {}", i), [Field::any("size", i * 100)]);
    }
    logger.error(&ctx, "batch 3 had rejected rows", [Field::any("rejected", 7)]);

    for err in logger.sync() {
        eprintln!("flush failed: {}", err);
    }

    // Example 2: swap outputs while running
    println!("2. Redirecting everything to stdout");
    logger.set_outputs(vec![Box::new(outputs::stdout(Severities::all()))]);
    logger.warning(&ctx, "now on the console", []);

    if !logger.shutdown(Duration::from_secs(2)) {
        eprintln!("logger shutdown timed out");
    }

    // Example 3: declarative configuration
    println!("\n3. Logger from a JSON configuration");
    let config = LoggerConfig::from_json_str(&format!(
        r#"{{
            "trace_id_key": "request_id",
            "format": {{ "type": "text", "time_format": "Rfc3339", "utc": true }},
            "outputs": [{{ "type": "file", "path": {:?}, "levels": ["INFO", "ERROR"] }}],
            "common_fields": [],
            "dir_header": true
        }}"#,
        log_dir.join("configured.log")
    ))?;
    let configured = config.into_builder()?.build()?;
    let ctx = Context::background().with_value("request_id", "r-77");
    configured.info(&ctx, "configured from JSON", []);
    configured.sync();

    println!("\nLog files:");
    for path in [&app_log, &error_log] {
        println!("--- {} ---\n{}", path.display(), fs::read_to_string(path)?);
    }

    println!("=== Example completed successfully! ===");
    Ok(())
}
