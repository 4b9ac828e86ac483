//! Health and status handlers.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use tracing::trace;
use ts_rs::TS;

use crate::state::{AppState, FeedStatus};

#[derive(Serialize, TS)]
#[ts(export)]
pub struct FeedInfo {
    name: String,
    status: FeedStatus,
}

#[derive(Serialize, TS)]
#[ts(export)]
pub struct StatusResponse {
    status: FeedStatus,
    version: String,
    commit: String,
    feeds: BTreeMap<String, FeedInfo>,
}

/// Health check endpoint
pub(super) async fn health() -> Json<Value> {
    trace!("health check requested");
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Status endpoint showing upstream feed health
pub(super) async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let mut feeds = BTreeMap::new();

    for (name, feed_status) in state.feed_statuses.all() {
        feeds.insert(
            name.clone(),
            FeedInfo {
                name,
                status: feed_status,
            },
        );
    }

    let overall_status = if feeds.values().any(|f| matches!(f.status, FeedStatus::Error)) {
        FeedStatus::Error
    } else if !feeds.is_empty()
        && feeds.values().all(|f| matches!(f.status, FeedStatus::Active))
    {
        FeedStatus::Active
    } else {
        FeedStatus::Unknown
    };

    Json(StatusResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: env!("GIT_COMMIT_HASH").to_string(),
        feeds,
    })
}
