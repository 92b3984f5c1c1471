//! Date and time helpers.
//!
//! Timestamps are stored as local wall-clock date-times without an offset,
//! the way registrations and posts have always been recorded.

use chrono::{Local, NaiveDateTime};

/// Format used when rendering timestamps for log lines and generated files
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local date-time, truncated to microseconds so it survives a
/// round-trip through SQLite unchanged.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    truncate_to_micros(now)
}

/// Drop sub-microsecond precision from a timestamp.
pub fn truncate_to_micros(value: NaiveDateTime) -> NaiveDateTime {
    let nanos = value.and_utc().timestamp_subsec_nanos();
    value - chrono::Duration::nanoseconds(i64::from(nanos % 1_000))
}

/// Format a timestamp with [`TIMESTAMP_FORMAT`]
pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}
