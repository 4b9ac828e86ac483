//! Classroom signage handlers: what's happening in each room right now.

use axum::extract::{Path, State};
use axum::response::Response;
use chrono::Utc;
use serde::Serialize;
use ts_rs::TS;

use crate::feeds;
use crate::schedule::{EventRecord, fmt_delta, resolve_dated_events};
use crate::state::AppState;
use crate::web::error::{ApiError, feed_error};
use crate::web::routes::{cache, with_cache_control};

/// "starts in" / "ends in" strings stay short on room cards.
const DURATION_UNITS: usize = 2;

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CurrentEventView {
    pub title: String,
    /// Time left in the event, e.g. `"1h, 20m"`.
    pub ends_in: String,
}

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpcomingEventView {
    pub title: String,
    pub start_time: String,
    pub starts_in: String,
}

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RoomSignView {
    /// Sign title, `{BUILDING}_{ROOM}`.
    pub room: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentEventView>,
    pub upcoming: Vec<UpcomingEventView>,
}

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SiteSignsView {
    pub site: String,
    pub rooms: Vec<RoomSignView>,
    pub timestamp: String,
}

fn resolve_sign(room: String, events: &[EventRecord]) -> RoomSignView {
    let now = Utc::now();
    let resolved = resolve_dated_events(events, now);

    RoomSignView {
        room,
        current: resolved.current.map(|event| CurrentEventView {
            title: event.title.clone(),
            ends_in: fmt_delta(event.end_time - now, Some(DURATION_UNITS)),
        }),
        upcoming: resolved
            .next
            .iter()
            .map(|event| UpcomingEventView {
                title: event.title.clone(),
                start_time: event.start_time.to_rfc3339(),
                starts_in: fmt_delta(event.start_time - now, Some(DURATION_UNITS)),
            })
            .collect(),
    }
}

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BuildingSignStats {
    pub building: String,
    pub signs: usize,
    pub events: usize,
}

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SignOverviewResponse {
    pub buildings: Vec<BuildingSignStats>,
}

/// `GET /api/signs`
///
/// Per-building sign and event counts, for the buildings index page.
pub(super) async fn sign_overview(State(state): State<AppState>) -> Result<Response, ApiError> {
    let stats = state.signage.sign_stats().await;
    state.feed_statuses.observe(feeds::names::SIGNAGE, &stats);
    let stats = stats.map_err(|e| feed_error("Signage feed", e))?;

    // Sign names are `{BUILDING}_{ROOM}`; fold rooms into their building.
    let mut grouped: indexmap::IndexMap<String, BuildingSignStats> = indexmap::IndexMap::new();
    for meta in stats {
        let building = meta
            .name
            .split('_')
            .next()
            .unwrap_or(meta.name.as_str())
            .to_owned();
        let entry = grouped
            .entry(building.clone())
            .or_insert_with(|| BuildingSignStats {
                building,
                signs: 0,
                events: 0,
            });
        entry.signs += 1;
        entry.events += meta.items;
    }

    Ok(with_cache_control(
        SignOverviewResponse {
            buildings: grouped.into_values().collect(),
        },
        cache::LIVE,
    ))
}

/// `GET /api/signs/{site}`
pub(super) async fn site_signs(
    State(state): State<AppState>,
    Path(site): Path<String>,
) -> Result<Response, ApiError> {
    let signs = state.signage.signs_for_site(&site).await;
    state.feed_statuses.observe(feeds::names::SIGNAGE, &signs);
    let signs = signs.map_err(|e| feed_error("Signage feed", e))?;

    let rooms = signs
        .into_iter()
        .map(|sign| resolve_sign(sign.title, &sign.items))
        .collect();

    Ok(with_cache_control(
        SiteSignsView {
            site,
            rooms,
            timestamp: Utc::now().to_rfc3339(),
        },
        cache::LIVE,
    ))
}
