//! Error types for the file logger
//!
//! None of these ever escape an emission call. The write path produces them
//! internally and turns them into standard-error diagnostics.

use std::io;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Prefix of the fallback line written to stderr when the log file cannot be opened
pub const FALLBACK_PREFIX: &str = "rust-file-logger";

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The log file could not be opened for append
    #[error("Opening failed on log file: {path}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Writing failed to log file: {path}")]
    FileWrite {
        path: String,
        #[source]
        source: io::Error,
    },

    /// `close(2)` on the log file descriptor failed
    #[error("Closing failed on log file: {path}")]
    FileClose {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },
}

impl LoggerError {
    pub fn file_open(path: impl Into<String>, source: io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<String>, source: io::Error) -> Self {
        LoggerError::FileWrite {
            path: path.into(),
            source,
        }
    }

    pub fn file_close(path: impl Into<String>, source: io::Error) -> Self {
        LoggerError::FileClose {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Text written to stderr when this error stops `line` from reaching the file.
    ///
    /// An open failure echoes the already-rendered line (which carries its own
    /// newline) behind [`FALLBACK_PREFIX`]. Other failures name the path.
    pub fn diagnostic(&self, line: &str) -> String {
        match self {
            LoggerError::FileOpen { .. } => format!("{}: {}", FALLBACK_PREFIX, line),
            other => format!("{}\n", other),
        }
    }
}
