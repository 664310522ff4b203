//! Timestamp formatting for table views and exports.
//!
//! Records carry epoch-millisecond timestamps; everything the user sees
//! renders them in local time through these helpers so tables, summaries,
//! and export files stay consistent.

use chrono::{Local, TimeZone};

/// Formats an epoch-millis timestamp as local "YYYY-MM-DD HH:MM".
/// Values outside the representable range render as a dash.
pub fn format_timestamp(millis: i64) -> String {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Formats an epoch-millis timestamp as a local calendar date.
pub fn format_date(millis: i64) -> String {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}
