//! Dining hall status handlers.

use axum::extract::{Path, State};
use axum::response::Response;
use serde::Serialize;
use ts_rs::TS;

use crate::campus::DiningHall;
use crate::clock::campus_now;
use crate::state::AppState;
use crate::web::error::ApiError;
use crate::web::hours::DomainStatusView;
use crate::web::routes::{cache, with_cache_control};

/// Countdown strings show at most hours/minutes/seconds.
const DURATION_UNITS: usize = 3;

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HallStatus {
    pub hall: DiningHall,
    pub label: String,
    #[serde(flatten)]
    pub status: DomainStatusView,
}

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiningResponse {
    pub halls: Vec<HallStatus>,
    pub timestamp: String,
}

fn hall_status(state: &AppState, hall: DiningHall) -> HallStatus {
    let now = campus_now();
    let resolved = state.dining_hours.resolve(hall.key(), now);
    HallStatus {
        hall,
        label: hall.label().to_owned(),
        status: DomainStatusView::from_resolved(&resolved, DURATION_UNITS),
    }
}

/// `GET /api/dining`
pub(super) async fn list_halls(State(state): State<AppState>) -> Response {
    let halls = DiningHall::ALL
        .into_iter()
        .map(|hall| hall_status(&state, hall))
        .collect();

    with_cache_control(
        DiningResponse {
            halls,
            timestamp: chrono::Utc::now().to_rfc3339(),
        },
        cache::LIVE,
    )
}

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PhaseHoursView {
    pub phase: String,
    /// e.g. `"7:00 AM"`.
    pub opens: String,
    pub closes: String,
}

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HallDetail {
    #[serde(flatten)]
    pub status: HallStatus,
    /// Today's posted hours per phase, in day order.
    pub today: Vec<PhaseHoursView>,
}

/// Today's posted hours for every phase the hall runs today.
fn todays_hours(state: &AppState, hall: DiningHall) -> Vec<PhaseHoursView> {
    use chrono::Datelike;

    let today = campus_now().weekday();
    let Some(schedule) = state.dining_hours.get(hall.key()) else {
        return Vec::new();
    };

    schedule
        .phases()
        .filter_map(|(phase, _)| {
            schedule.window_on(phase, today).map(|window| PhaseHoursView {
                phase: phase.to_owned(),
                opens: window.start.format("%-I:%M %p").to_string(),
                closes: window.end.format("%-I:%M %p").to_string(),
            })
        })
        .collect()
}

/// `GET /api/dining/{hall}`
pub(super) async fn get_hall(
    State(state): State<AppState>,
    Path(hall): Path<String>,
) -> Result<Response, ApiError> {
    let hall = DiningHall::parse(&hall).ok_or_else(|| ApiError::unknown_hall(&hall))?;
    Ok(with_cache_control(
        HallDetail {
            status: hall_status(&state, hall),
            today: todays_hours(&state, hall),
        },
        cache::LIVE,
    ))
}
