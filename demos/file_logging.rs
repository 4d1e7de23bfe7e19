//! File logging example
//!
//! Writes a few leveled lines to `application.log`, changes the threshold and
//! timestamp pattern on the fly, and shows that an unwritable path only
//! produces a diagnostic on stderr.
//!
//! Run with: cargo run --example file_logging

use rust_file_logger::prelude::*;
use rust_file_logger::{info, warn};

fn main() {
    println!("=== Rust File Logger - File Logging Example ===\n");

    let logger = Logger::new("application.log", timestamp::DATETIME);

    println!("1. Logging at every level:");
    logger.debug("Loading configuration...");
    logger.info("Application started");
    logger.warn("Using default settings for some options");
    logger.error("Failed to load optional plugin");
    logger.fatal("Fatal is only a label; the process keeps running");

    println!("2. Raising the threshold to WARN:");
    logger.set_level("WARN");
    for i in 1..=5 {
        info!(logger, "Processing item {}/5", i);
        if i == 3 {
            warn!(logger, "Item {} took longer than expected", i);
        }
    }

    println!("3. Switching to ISO 8601 timestamps:");
    logger.set_time_format(timestamp::ISO8601);
    logger.error("All operations completed");

    println!("4. Logging to a directory (expect a line on stderr):");
    let broken = Logger::new(".", timestamp::TIME_ONLY);
    broken.info("This line cannot reach a file");

    println!("\n=== Example completed! ===");
    println!("Check 'application.log' for the output");
}
