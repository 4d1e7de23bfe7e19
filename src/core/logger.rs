//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use crate::appenders::FileAppender;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Mutable settings, guarded separately from the write lock so that
/// reconfiguring never waits on file I/O.
#[derive(Debug, Clone)]
struct Settings {
    min_level: LogLevel,
    time_format: String,
}

/// Leveled logger appending `<time> <LEVEL>: <message>` lines to one file.
///
/// Writes through one instance are serialized by an internal mutex, so lines
/// never interleave. The lock is per instance, not per path: two loggers
/// pointed at the same file may interleave at the OS append granularity.
///
/// Logging never fails from the caller's point of view. If the file cannot be
/// opened the line is echoed to stderr behind
/// [`FALLBACK_PREFIX`](crate::core::error::FALLBACK_PREFIX); write and close
/// failures print a diagnostic naming the path.
///
/// # Example
///
/// ```no_run
/// use rust_file_logger::prelude::*;
///
/// let logger = Logger::new("server.log", "%Y-%m-%d %H:%M:%S");
/// logger.set_level("INFO");
/// logger.debug("dropped by the filter");
/// logger.info("server started");
/// logger.infof(format_args!("listening on port {}", 8080));
/// ```
pub struct Logger {
    appender: FileAppender,
    settings: RwLock<Settings>,
    write_lock: Mutex<()>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger for `path` at the most permissive level (`DEBUG`).
    ///
    /// Nothing is created or checked on disk here; a bad path only shows up
    /// as a diagnostic on the first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, time_format: impl Into<String>) -> Self {
        Self {
            appender: FileAppender::new(path),
            settings: RwLock::new(Settings {
                min_level: LogLevel::Debug,
                time_format: time_format.into(),
            }),
            write_lock: Mutex::new(()),
            metrics: LoggerMetrics::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        let logger = Self::new(config.path, config.time_format);
        logger.set_min_level(config.min_level);
        logger
    }

    pub fn path(&self) -> &Path {
        self.appender.path()
    }

    pub fn min_level(&self) -> LogLevel {
        self.settings.read().min_level
    }

    pub fn time_format(&self) -> String {
        self.settings.read().time_format.clone()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        self.settings.write().min_level = level;
    }

    /// Set the threshold from its name.
    ///
    /// Accepts exactly `"DEBUG"`, `"INFO"`, `"WARN"`, `"ERROR"` or `"FATAL"`.
    /// Any other input resets the threshold to `DEBUG`.
    pub fn set_level(&self, name: &str) {
        self.set_min_level(LogLevel::from_token(name));
    }

    /// Strict variant of [`set_level`](Self::set_level): unknown names are
    /// rejected and the current threshold is kept.
    pub fn try_set_level(&self, name: &str) -> Result<()> {
        let level: LogLevel = name.parse()?;
        self.set_min_level(level);
        Ok(())
    }

    /// Replace the strftime pattern used for subsequent lines. Not validated.
    pub fn set_time_format(&self, format: impl Into<String>) {
        self.settings.write().time_format = format.into();
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.settings.read().min_level
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.log_fmt(level, format_args!("{}", message.as_ref()));
    }

    /// Format and write `args` if `level` passes the filter.
    ///
    /// Arguments are only formatted once the filter has passed.
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        // Formatted before locking so a Display impl that logs cannot deadlock.
        let message = fmt::format(args);

        let _guard = self.write_lock.lock();
        let time_format = self.time_format();
        let line = LogEntry::capture(level, &time_format, message).render();

        match self.appender.append(&line) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                self.metrics.record_failed();
                Self::report(&e, &line);
            }
        }
    }

    fn report(err: &LoggerError, line: &str) {
        let diagnostic = err.diagnostic(line);
        let _ = io::stderr().lock().write_all(diagnostic.as_bytes());
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Debug, args);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Info, args);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Warn, args);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Error, args);
    }

    /// Log at `FATAL`. The process keeps running.
    #[inline]
    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Fatal, message);
    }

    #[inline]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Fatal, args);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.settings.read();
        f.debug_struct("Logger")
            .field("path", &self.appender.path())
            .field("min_level", &settings.min_level)
            .field("time_format", &settings.time_format)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_file_logger::prelude::*;
///
/// let logger = Logger::builder("app.log")
///     .time_format(timestamp::ISO8601)
///     .min_level(LogLevel::Warn)
///     .build();
/// assert_eq!(logger.min_level(), LogLevel::Warn);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    /// Create a new builder for `path` with default settings
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            config: LoggerConfig::new(path),
        }
    }

    /// Point the logger at a different file
    #[must_use = "builder methods return a new value"]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.config.time_format = format.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.min_level = level;
        self
    }

    pub fn build(self) -> Logger {
        Logger::from_config(self.config)
    }
}

impl Logger {
    #[must_use]
    pub fn builder(path: impl Into<PathBuf>) -> LoggerBuilder {
        LoggerBuilder::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timestamp;
    use std::fs;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn logger_in(dir: &TempDir) -> Logger {
        Logger::new(dir.path().join("test.log"), "TS")
    }

    fn read(logger: &Logger) -> String {
        fs::read_to_string(logger.path()).unwrap_or_default()
    }

    #[test]
    fn test_logger_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }

    #[test]
    fn test_new_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        assert_eq!(logger.min_level(), LogLevel::Debug);
        assert_eq!(logger.time_format(), "TS");
        assert!(!logger.path().exists());
    }

    #[test]
    fn test_line_layout() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        logger.info("server started");
        assert_eq!(read(&logger), "TS INFO: server started\n");
    }

    #[test]
    fn test_every_level_label() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        logger.debug("d");
        logger.info("i");
        logger.warn("w");
        logger.error("e");
        logger.fatal("f");

        assert_eq!(
            read(&logger),
            "TS DEBUG: d\nTS INFO: i\nTS WARN: w\nTS ERROR: e\nTS FATAL: f\n"
        );
    }

    #[test]
    fn test_formatted_variants() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        logger.debugf(format_args!("a={}", 1));
        logger.infof(format_args!("value={}", 42));
        logger.warnf(format_args!("{:>3}", 7));
        logger.errorf(format_args!("{}-{}", "x", "y"));
        logger.fatalf(format_args!("{:?}", "q"));

        assert_eq!(
            read(&logger),
            "TS DEBUG: a=1\nTS INFO: value=42\nTS WARN:   7\nTS ERROR: x-y\nTS FATAL: \"q\"\n"
        );
    }

    #[test]
    fn test_filtered_calls_do_no_io() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);
        logger.set_level("ERROR");

        logger.debug("d");
        logger.info("i");
        logger.warnf(format_args!("w{}", 1));

        assert!(!logger.path().exists());
        assert_eq!(logger.metrics().filtered_count(), 3);
        assert_eq!(logger.metrics().written_count(), 0);

        logger.error("e");
        logger.fatal("f");
        assert_eq!(read(&logger), "TS ERROR: e\nTS FATAL: f\n");
        assert_eq!(logger.metrics().written_count(), 2);
    }

    #[test]
    fn test_arguments_not_formatted_when_filtered() {
        struct Panics;
        impl fmt::Display for Panics {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("formatted a filtered message");
            }
        }

        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);
        logger.set_level("FATAL");
        logger.errorf(format_args!("{}", Panics));
        assert_eq!(logger.metrics().filtered_count(), 1);
    }

    #[test]
    fn test_set_level_tokens() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        for level in LogLevel::ALL {
            logger.set_level(level.to_str());
            assert_eq!(logger.min_level(), level);
        }

        for bad in ["info", "", "Error", "VERBOSE"] {
            logger.set_level("FATAL");
            logger.set_level(bad);
            assert_eq!(logger.min_level(), LogLevel::Debug, "input {:?}", bad);
        }
    }

    #[test]
    fn test_try_set_level_keeps_threshold_on_error() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        logger.try_set_level("WARN").unwrap();
        assert_eq!(logger.min_level(), LogLevel::Warn);

        let err = logger.try_set_level("warn").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));
        assert_eq!(logger.min_level(), LogLevel::Warn);
    }

    #[test]
    fn test_last_time_format_wins() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        logger.set_time_format("A");
        logger.set_time_format("B");
        logger.info("x");
        assert_eq!(read(&logger), "B INFO: x\n");
    }

    #[test]
    fn test_fatal_does_not_exit() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        logger.fatal("first");
        logger.fatalf(format_args!("second {}", 2));
        logger.info("still running");

        assert_eq!(read(&logger).lines().count(), 3);
    }

    #[test]
    fn test_open_failure_is_absorbed() {
        let temp_dir = TempDir::new().unwrap();
        let logger = Logger::new(temp_dir.path(), "TS");

        logger.info("lost");
        logger.error("lost too");

        assert_eq!(logger.metrics().failed_count(), 2);
        assert_eq!(logger.metrics().written_count(), 0);
        assert!(temp_dir.path().is_dir());
    }

    #[test]
    fn test_builder_and_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("built.log");

        let logger = Logger::builder(&path)
            .time_format("T")
            .min_level(LogLevel::Info)
            .build();
        assert_eq!(logger.path(), path.as_path());
        assert_eq!(logger.time_format(), "T");
        assert_eq!(logger.min_level(), LogLevel::Info);

        logger.debug("hidden");
        logger.info("shown");
        assert_eq!(fs::read_to_string(&path).unwrap(), "T INFO: shown\n");
    }

    #[test]
    fn test_builder_path_overrides_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("moved.log");

        let logger = LoggerBuilder::default().path(&path).time_format("P").build();
        assert_eq!(logger.path(), path.as_path());

        logger.warn("here");
        assert_eq!(fs::read_to_string(&path).unwrap(), "P WARN: here\n");
    }

    #[test]
    fn test_builder_default_uses_datetime() {
        let logger = LoggerBuilder::default().build();
        assert_eq!(logger.time_format(), timestamp::DATETIME);
        assert_eq!(logger.min_level(), LogLevel::Debug);
    }

    #[test]
    fn test_reconfigure_while_logging() {
        let temp_dir = TempDir::new().unwrap();
        let logger = Arc::new(logger_in(&temp_dir));

        let writer = {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..200 {
                    logger.fatalf(format_args!("line {}", i));
                }
            })
        };
        let configurer = {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..200 {
                    logger.set_level(if i % 2 == 0 { "WARN" } else { "DEBUG" });
                    logger.set_time_format(if i % 2 == 0 { "TS" } else { "TT" });
                }
            })
        };
        writer.join().unwrap();
        configurer.join().unwrap();

        let content = read(&logger);
        assert_eq!(content.lines().count(), 200);
        for line in content.lines() {
            assert!(line.starts_with("TS FATAL: line ") || line.starts_with("TT FATAL: line "));
        }
    }

    #[test]
    fn test_debug_impl() {
        let logger = Logger::new("x.log", "%H");
        let debug = format!("{:?}", logger);
        assert!(debug.contains("x.log"));
        assert!(debug.contains("Debug"));
    }
}
