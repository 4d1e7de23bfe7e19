//! Timestamp formatting utilities
//!
//! Log lines carry the local wall-clock time rendered through a strftime
//! pattern. Patterns are handed to chrono verbatim; nothing is validated up
//! front.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::{self, Write};

/// `2024-01-02 15:04:05`, the default pattern
pub const DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// ISO 8601 with milliseconds and offset: `2024-01-02T15:04:05.123+01:00`
pub const ISO8601: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// RFC 2822 style: `Tue, 02 Jan 2024 15:04:05 +0100`
pub const RFC2822: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Clock time only: `15:04:05`
pub const TIME_ONLY: &str = "%H:%M:%S";

/// Render `datetime` through the strftime `pattern`.
///
/// chrono refuses to render malformed patterns (a dangling `%`, an unknown
/// specifier). In that case the pattern text itself is returned so a log
/// line is still produced.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rust_file_logger::core::timestamp::format_timestamp;
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();
/// assert_eq!(format_timestamp("%Y-%m-%d %H:%M:%S", &at), "2024-01-02 15:04:05");
/// ```
#[must_use]
pub fn format_timestamp<Tz>(pattern: &str, datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut rendered = String::with_capacity(pattern.len() + 16);
    if write!(rendered, "{}", datetime.format(pattern)).is_err() {
        rendered.clear();
        rendered.push_str(pattern);
    }
    rendered
}

/// Render the current local time through `pattern`
#[must_use]
pub fn now(pattern: &str) -> String {
    format_timestamp(pattern, &Local::now())
}
