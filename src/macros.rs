//! Logging macros for formatted emission.
//!
//! These take `format!`-style arguments. The arguments are only formatted
//! when the level passes the logger's threshold.
//!
//! # Examples
//!
//! ```no_run
//! use rust_file_logger::prelude::*;
//! use rust_file_logger::info;
//!
//! let logger = Logger::new("app.log", timestamp::DATETIME);
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```no_run
/// # use rust_file_logger::prelude::*;
/// # let logger = Logger::new("app.log", "%H:%M:%S");
/// use rust_file_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, ::std::format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```no_run
/// # use rust_file_logger::prelude::*;
/// # let logger = Logger::new("app.log", "%H:%M:%S");
/// use rust_file_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```no_run
/// # use rust_file_logger::prelude::*;
/// # let logger = Logger::new("app.log", "%H:%M:%S");
/// use rust_file_logger::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message. Does not exit.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
