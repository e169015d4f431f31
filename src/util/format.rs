//! Timestamp display helpers for message bubbles and the sidebar.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Utc};

/// Hour-and-minute stamp shown under each message bubble.
pub fn time_of_day(ts: DateTime<Utc>) -> String {
    ts.format("%H:%M").to_string()
}

/// Short month-and-day stamp shown in the sidebar list.
pub fn short_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d").to_string()
}
