//! Recreation center status and occupancy handlers.

use axum::extract::{Path, State};
use axum::response::Response;
use serde::Serialize;
use ts_rs::TS;

use crate::campus::RecFacility;
use crate::clock::campus_now;
use crate::feeds;
use crate::schedule::{OccupantRecord, typical_for_timeslot};
use crate::state::AppState;
use crate::web::error::{ApiError, feed_error};
use crate::web::hours::DomainStatusView;
use crate::web::routes::{cache, with_cache_control};

const DURATION_UNITS: usize = 3;

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FacilityStatus {
    pub facility: RecFacility,
    pub label: String,
    #[serde(flatten)]
    pub status: DomainStatusView,
}

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecResponse {
    pub facilities: Vec<FacilityStatus>,
    pub timestamp: String,
}

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OccupancyResponse {
    pub count: u32,
    /// Historical average for the current 15-minute slot, when published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical: Option<OccupantRecord>,
    /// Live count over typical, when a typical record exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busyness: Option<f32>,
    pub label: String,
}

fn facility_status(state: &AppState, facility: RecFacility) -> FacilityStatus {
    let now = campus_now();
    let resolved = state.rec_hours.resolve(facility.key(), now);
    FacilityStatus {
        facility,
        label: facility.label().to_owned(),
        status: DomainStatusView::from_resolved(&resolved, DURATION_UNITS),
    }
}

/// Rough label for how crowded the building is relative to typical.
fn busyness_label(busyness: Option<f32>) -> &'static str {
    match busyness {
        None => "No Data",
        Some(ratio) if ratio < 0.5 => "Not Busy",
        Some(ratio) if ratio < 0.85 => "Less Busy Than Usual",
        Some(ratio) if ratio < 1.15 => "About As Busy As Usual",
        Some(ratio) if ratio < 1.5 => "Busier Than Usual",
        Some(_) => "Very Busy",
    }
}

/// `GET /api/rec`
pub(super) async fn list_facilities(State(state): State<AppState>) -> Response {
    let facilities = RecFacility::ALL
        .into_iter()
        .map(|facility| facility_status(&state, facility))
        .collect();

    with_cache_control(
        RecResponse {
            facilities,
            timestamp: chrono::Utc::now().to_rfc3339(),
        },
        cache::LIVE,
    )
}

/// `GET /api/rec/occupancy`
pub(super) async fn occupancy(State(state): State<AppState>) -> Result<Response, ApiError> {
    let count = state.occupancy.live_count().await;
    state
        .feed_statuses
        .observe(feeds::names::OCCUPANCY, &count);
    let count = count.map_err(|e| feed_error("Occupancy feed", e))?;

    // The averages are a nice-to-have on top of the live count; a failure
    // here degrades to "no typical data" rather than a gateway error.
    let averages = match state.occupancy.today_averages().await {
        Ok(averages) => averages,
        Err(error) => {
            tracing::warn!(error = ?error, "occupancy averages unavailable");
            Vec::new()
        }
    };

    let typical = typical_for_timeslot(&averages, campus_now()).cloned();
    let busyness = typical
        .as_ref()
        .filter(|record| record.count > 0)
        .map(|record| count as f32 / record.count as f32);

    Ok(with_cache_control(
        OccupancyResponse {
            count,
            typical,
            busyness,
            label: busyness_label(busyness).to_owned(),
        },
        cache::LIVE,
    ))
}

/// `GET /api/rec/{facility}`
pub(super) async fn get_facility(
    State(state): State<AppState>,
    Path(facility): Path<String>,
) -> Result<Response, ApiError> {
    let facility =
        RecFacility::parse(&facility).ok_or_else(|| ApiError::unknown_facility(&facility))?;
    Ok(with_cache_control(
        facility_status(&state, facility),
        cache::LIVE,
    ))
}
