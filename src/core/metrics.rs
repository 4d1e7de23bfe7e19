//! Logger metrics for observability
//!
//! Counters for lines written, lines dropped by the level filter, and lines
//! that failed to reach the file. Counting never changes what gets written.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use rust_file_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_failed();
///
/// assert_eq!(metrics.written_count(), 1);
/// assert_eq!(metrics.failed_count(), 1);
/// assert_eq!(metrics.filtered_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Lines appended to the log file
    written: AtomicU64,

    /// Calls below the minimum level
    filtered: AtomicU64,

    /// Lines lost to an open, write or close failure
    failed: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            written: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written_count(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of attempted writes that failed, as a percentage (0.0 - 100.0)
    ///
    /// Filtered calls are not attempts. Returns 0.0 before any attempt.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_count();
        let attempted = failed + self.written_count();
        if attempted == 0 {
            return 0.0;
        }
        (failed as f64 / attempted as f64) * 100.0
    }
}
