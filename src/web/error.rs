//! API error type shared by all handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use ts_rs::TS;

/// Machine-readable error codes surfaced to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ApiErrorCode {
    UnknownHall,
    UnknownFacility,
    InvalidParams,
    FeedUnavailable,
}

impl ApiErrorCode {
    fn status(self) -> StatusCode {
        match self {
            ApiErrorCode::UnknownHall | ApiErrorCode::UnknownFacility => StatusCode::NOT_FOUND,
            ApiErrorCode::InvalidParams => StatusCode::BAD_REQUEST,
            ApiErrorCode::FeedUnavailable => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn unknown_hall(name: &str) -> Self {
        Self::new(ApiErrorCode::UnknownHall, format!("Unknown dining hall '{name}'"))
    }

    pub fn unknown_facility(name: &str) -> Self {
        Self::new(
            ApiErrorCode::UnknownFacility,
            format!("Unknown rec facility '{name}'"),
        )
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::InvalidParams, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        });
        (self.code.status(), Json(body)).into_response()
    }
}

/// Log a feed failure and map it to a gateway error.
///
/// Handlers that can degrade to empty data should do so instead; this is
/// for endpoints whose whole payload comes from the failed feed.
pub fn feed_error(context: &str, error: crate::feeds::FeedError) -> ApiError {
    tracing::warn!(error = ?error, "{context} failed");
    ApiError::new(ApiErrorCode::FeedUnavailable, format!("{context} is unavailable"))
}
