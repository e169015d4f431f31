//! Keyword-driven assistant reply generation.

#[cfg(test)]
#[path = "reply_test.rs"]
mod reply_test;

use std::sync::LazyLock;

use chrono::Utc;
use rand::Rng;
use regex::Regex;

use crate::state::message::{ChartKind, ChartSpec, Message, Role};

/// Artificial latency between a user message and its simulated reply.
pub const REPLY_DELAY_MS: u64 = 1000;

/// Chart title used when the request names no subject.
pub const DEFAULT_CHART_TITLE: &str = "Random Data Chart";

/// Bounds (inclusive) for the number of generated chart points.
pub const POINT_COUNT_RANGE: std::ops::RangeInclusive<u32> = 5..=9;

/// Captures the chart subject from "chart for <subject>", stopping at a
/// sentence end, period, or comma.
static CHART_SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)chart for (.*?)(?:$|\.|,)").expect("static pattern"));

/// Whether the user asked for a chart (case-insensitive substring).
pub fn is_chart_request(text: &str) -> bool {
    text.to_lowercase().contains("chart")
}

/// Subject of a chart request, or the default title when none is named.
pub fn chart_subject(text: &str) -> String {
    CHART_SUBJECT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|subject| !subject.is_empty())
        .map_or_else(|| DEFAULT_CHART_TITLE.to_owned(), str::to_owned)
}

/// Fabricate the assistant reply to `user_text`.
///
/// Chart requests get a reply carrying a randomly chosen kind and point
/// count; anything else gets a canned echo. The message id comes from the
/// active session's counter, never from list length.
pub fn generate_reply(user_text: &str, id: u64, rng: &mut impl Rng) -> Message {
    let timestamp = Utc::now();

    if is_chart_request(user_text) {
        let kind = ChartKind::ALL[rng.random_range(0..ChartKind::ALL.len())];
        let point_count = rng.random_range(POINT_COUNT_RANGE);
        let title = chart_subject(user_text);
        Message {
            id,
            role: Role::Assistant,
            content: format!("Here's a {kind} chart for {title}:"),
            timestamp,
            chart_data: Some(ChartSpec {
                kind,
                title,
                point_count,
            }),
        }
    } else {
        Message {
            id,
            role: Role::Assistant,
            content: format!("This is a simulated response to: \"{user_text}\""),
            timestamp,
            chart_data: None,
        }
    }
}
