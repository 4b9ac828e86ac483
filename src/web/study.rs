//! Library study-room availability handlers.

use axum::extract::State;
use axum::response::Response;
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;
use ts_rs::TS;

use crate::feeds;
use crate::feeds::study::AvailabilityRecord;
use crate::schedule::{EventRecord, fmt_delta, resolve_dated_events};
use crate::state::AppState;
use crate::web::error::{ApiError, feed_error};
use crate::web::routes::{cache, with_cache_control};

const DURATION_UNITS: usize = 2;

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StudySpaceView {
    pub room_id: i32,
    pub room_name: String,
    /// Whether a free window contains now.
    pub available: bool,
    /// How long the room stays free, while available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_for: Option<String>,
    /// Time until the next free window, while unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_opening: Option<String>,
    /// Free windows later today.
    pub windows_remaining: usize,
}

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StudyResponse {
    pub rooms: Vec<StudySpaceView>,
    pub timestamp: String,
}

/// Availability windows for one room, resolved like any dated events.
fn resolve_space(room_id: i32, windows: Vec<AvailabilityRecord>) -> StudySpaceView {
    let now = Utc::now();
    let room_name = windows
        .first()
        .map(|record| record.room_name.clone())
        .unwrap_or_default();

    let events: Vec<EventRecord> = windows
        .into_iter()
        .map(|record| EventRecord {
            title: record.room_name,
            start_time: record.start_time,
            end_time: record.end_time,
            content: String::new(),
        })
        .collect();

    let resolved = resolve_dated_events(&events, now);

    StudySpaceView {
        room_id,
        room_name,
        available: resolved.current.is_some(),
        free_for: resolved
            .current
            .map(|event| fmt_delta(event.end_time - now, Some(DURATION_UNITS))),
        next_opening: resolved
            .next
            .first()
            .map(|event| fmt_delta(event.start_time - now, Some(DURATION_UNITS))),
        windows_remaining: resolved.next.len(),
    }
}

/// `GET /api/study`
pub(super) async fn list_spaces(State(state): State<AppState>) -> Result<Response, ApiError> {
    let available = state.study.available().await;
    state.feed_statuses.observe(feeds::names::STUDY, &available);
    let available = available.map_err(|e| feed_error("Study availability feed", e))?;

    // Group the flat window list by room, preserving feed order.
    let mut by_room: IndexMap<i32, Vec<AvailabilityRecord>> = IndexMap::new();
    for record in available {
        by_room.entry(record.room_id).or_default().push(record);
    }

    let rooms = by_room
        .into_iter()
        .map(|(room_id, windows)| resolve_space(room_id, windows))
        .collect();

    Ok(with_cache_control(
        StudyResponse {
            rooms,
            timestamp: Utc::now().to_rfc3339(),
        },
        cache::LIVE,
    ))
}
