//! Web API router construction and shared response utilities.

use axum::{
    Router,
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::get,
};

use std::time::Duration;

use axum::response::Json;

use crate::state::AppState;
use crate::web::{dining, professor_ratings, rec, signs, status, study};
use tower_http::cors::CorsLayer;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer};

/// Cache-Control presets for public endpoints.
///
/// The CDN respects `s-maxage` for edge caching and
/// `stale-while-revalidate` for serving stale content while re-fetching in
/// the background. Live statuses stay fresh enough for 30-60s polling.
pub mod cache {
    /// Open/closed, occupancy, and signage statuses -- short-lived.
    pub const LIVE: &str = "public, max-age=15, s-maxage=30, stale-while-revalidate=30";
    /// Merged rating reports -- the upstream changes slowly.
    pub const REFERENCE: &str = "public, max-age=300, s-maxage=3600, stale-while-revalidate=300";
}

/// Wraps a JSON response with a `Cache-Control` header.
pub fn with_cache_control<T: serde::Serialize>(value: T, header: &'static str) -> Response {
    let mut response = Json(value).into_response();
    response.headers_mut().insert(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(header),
    );
    response
}

/// Creates the web server router
pub fn create_router(app_state: AppState) -> Router {
    let api_router = Router::new()
        .route("/health", get(status::health))
        .route("/status", get(status::status))
        .route("/dining", get(dining::list_halls))
        .route("/dining/{hall}", get(dining::get_hall))
        .route("/rec", get(rec::list_facilities))
        .route("/rec/occupancy", get(rec::occupancy))
        .route("/rec/{facility}", get(rec::get_facility))
        .route("/signs", get(signs::sign_overview))
        .route("/signs/{site}", get(signs::site_signs))
        .route("/study", get(study::list_spaces))
        .route("/ratings", get(professor_ratings::merged_rating))
        .with_state(app_state);

    let router = Router::new().nest("/api", api_router);

    router.layer((
        // The API is read-only and consumed by the portal frontend on its
        // own origin during development.
        CorsLayer::permissive(),
        CompressionLayer::new()
            .zstd(true)
            .br(true)
            .gzip(true)
            .quality(tower_http::CompressionLevel::Fastest),
        TimeoutLayer::new(Duration::from_secs(30)),
    ))
}
