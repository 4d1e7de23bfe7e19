//! # Rust File Logger
//!
//! A minimal leveled logger that appends timestamped, level-tagged lines to a
//! single file.
//!
//! ## Features
//!
//! - **Leveled**: `DEBUG < INFO < WARN < ERROR < FATAL` with a runtime threshold
//! - **Thread Safe**: writes through one logger never interleave
//! - **No Held Handles**: every line opens, appends and closes the file
//! - **Never Fails the Caller**: I/O problems become stderr diagnostics
//!
//! ```no_run
//! use rust_file_logger::prelude::*;
//! use rust_file_logger::info;
//!
//! let logger = Logger::new("app.log", "%Y-%m-%d %H:%M:%S");
//! logger.set_level("INFO");
//! info!(logger, "value={}", 42);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::FileAppender;
    pub use crate::core::timestamp;
    pub use crate::core::{
        LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        Result,
    };
}

pub use crate::appenders::FileAppender;
pub use crate::core::{
    LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result,
    FALLBACK_PREFIX,
};
