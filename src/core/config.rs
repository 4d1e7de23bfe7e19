//! Logger settings as a plain value
//!
//! `LoggerConfig` derives serde so a host application can embed it in its own
//! configuration. This crate never reads configuration files itself.

use super::log_level::LogLevel;
use super::timestamp;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Target log file
    pub path: PathBuf,

    /// strftime pattern for the line timestamp
    pub time_format: String,

    /// Lines below this level are dropped
    pub min_level: LogLevel,
}

impl LoggerConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("app.log"),
            time_format: timestamp::DATETIME.to_string(),
            min_level: LogLevel::Debug,
        }
    }
}
