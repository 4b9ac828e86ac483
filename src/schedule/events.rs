//! Resolution of dated event feeds (classroom signage, study-room slots).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single dated event from a signage or availability feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub content: String,
}

/// Outcome of classifying "now" against a day's worth of events.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedResolution<'a> {
    /// The event containing now, if any.
    pub current: Option<&'a EventRecord>,
    /// Every event that has yet to begin, soonest first.
    pub next: Vec<&'a EventRecord>,
}

/// Classify `now` against a list of dated events.
///
/// The current event is the first one in input order whose half-open
/// `[start_time, end_time)` range contains `now`; when overlapping events
/// exist, input order breaks the tie. `next` keeps everything that starts
/// after `now` so callers can render "N more today", not just the first.
pub fn resolve_dated_events(events: &[EventRecord], now: DateTime<Utc>) -> DatedResolution<'_> {
    let current = events
        .iter()
        .find(|event| event.start_time <= now && now < event.end_time);

    let mut next: Vec<&EventRecord> = events
        .iter()
        .filter(|event| event.start_time > now)
        .collect();
    next.sort_by_key(|event| event.start_time);

    DatedResolution { current, next }
}
