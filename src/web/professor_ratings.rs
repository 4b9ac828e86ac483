//! Professor rating handlers.

use axum::extract::{Query, State};
use axum::response::Response;
use futures::future::join_all;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::feeds;
use crate::ratings::{RatingReport, merge_reports};
use crate::state::AppState;
use crate::web::error::ApiError;
use crate::web::routes::{cache, with_cache_control};

/// A professor can be filed under a handful of identifiers at most.
const MAX_IDS: usize = 8;

#[derive(Deserialize)]
pub struct RatingsParams {
    /// Comma-separated rating-service identifiers for one professor.
    pub ids: String,
}

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RatingsResponse {
    /// Merged report, or `null` when nothing is filed under any id.
    pub report: Option<RatingReport>,
    pub sources: usize,
}

/// `GET /api/ratings?ids=a,b,c`
///
/// Fetches every identifier's partial report concurrently and merges them.
/// Identifiers that fail or 404 upstream are skipped; the merge is
/// best-effort, and an empty result renders as "not rated", not an error.
pub(super) async fn merged_rating(
    State(state): State<AppState>,
    Query(params): Query<RatingsParams>,
) -> Result<Response, ApiError> {
    let ids: Vec<&str> = params
        .ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    if ids.is_empty() {
        return Err(ApiError::invalid_params("At least one id is required"));
    }
    if ids.len() > MAX_IDS {
        return Err(ApiError::invalid_params(format!(
            "At most {MAX_IDS} ids per request"
        )));
    }

    let fetches = join_all(ids.iter().map(|id| state.ratings.report(id))).await;

    let mut reports: Vec<RatingReport> = Vec::new();
    let mut errored = false;
    for (id, fetched) in ids.iter().zip(fetches) {
        match fetched {
            Ok(Some(report)) => reports.push(report),
            Ok(None) => {}
            Err(error) => {
                errored = true;
                tracing::warn!(id, error = ?error, "rating report fetch failed");
            }
        }
    }
    state.feed_statuses.set(
        feeds::names::RATINGS,
        if errored {
            crate::state::FeedStatus::Error
        } else {
            crate::state::FeedStatus::Active
        },
    );

    let sources = reports.len();
    let report = merge_reports(reports);
    debug!(requested = ids.len(), sources, merged = report.is_some(), "resolved rating report");

    Ok(with_cache_control(RatingsResponse { report, sources }, cache::REFERENCE))
}
