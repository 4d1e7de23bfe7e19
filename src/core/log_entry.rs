//! Log entry structure

use super::log_level::LogLevel;
use super::timestamp;
use std::fmt;

/// One log line, timestamp already rendered.
///
/// The message is kept as given: embedded newlines are not escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, timestamp: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: timestamp.into(),
            message: message.into(),
        }
    }

    /// Stamp `message` with the current local time rendered through `time_format`
    pub fn capture(level: LogLevel, time_format: &str, message: impl Into<String>) -> Self {
        Self::new(level, timestamp::now(time_format), message)
    }

    /// `<timestamp> <LEVEL>: <message>\n`
    pub fn render(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.timestamp, self.level, self.message)
    }
}
