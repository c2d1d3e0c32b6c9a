//! Structured logging example
//!
//! Emits JSON lines to stdout and shows the process-scoped logger.
//!
//! Run with: cargo run --example json_logging

use trace_logger::prelude::*;
use trace_logger::{global, CommonField};

fn handle_request(ctx: &Context, user: &str) {
    global::info(ctx, "request accepted", [Field::string("user", user)]);
    if user == "mallory" {
        global::warning(ctx, "suspicious user", [Field::string("user", user)]);
    }
}

fn main() -> Result<()> {
    println!("=== Trace Logger - JSON Logging Example ===\n");

    let logger = Logger::builder()
        .formatter(JsonFormatter::new())
        .output(outputs::stdout(Severities::all()))
        .common_field("service", "checkout")
        .build()?;
    global::init(logger);

    for (trace_id, user) in [("a1", "alice"), ("b2", "mallory")] {
        let ctx = Context::background().with_trace_id(trace_id);
        handle_request(&ctx, user);
    }

    global::set_common_fields(vec![
        CommonField::new("service", "checkout"),
        CommonField::new("region", "eu-west-1"),
    ]);
    global::error(
        &Context::background(),
        "payment provider unavailable",
        [Field::any("status", 503)],
    );

    for err in global::shutdown() {
        eprintln!("flush failed: {}", err);
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
