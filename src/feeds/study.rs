//! Client for the library study-room availability service.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::FeedError;
use super::names::STUDY;

/// One bookable free window for a study room.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRecord {
    pub room_id: i32,
    pub room_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct AvailableSpacesResponse {
    available: Vec<AvailabilityRecord>,
}

/// Client for the study-space reservation system's availability export.
pub struct StudyClient {
    client: reqwest::Client,
    base_url: Url,
}

impl StudyClient {
    pub fn new(base_url: Url) -> Result<Self> {
        Ok(Self {
            client: super::http_client().context("Failed to build study HTTP client")?,
            base_url,
        })
    }

    /// Every currently published free window, across all rooms.
    pub async fn available(&self) -> Result<Vec<AvailabilityRecord>, FeedError> {
        let url = self
            .base_url
            .join("study/available")
            .map_err(|e| FeedError::Url(STUDY, e))?;

        let body: AvailableSpacesResponse = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Request(STUDY, e))?
            .error_for_status()
            .map_err(|e| FeedError::Status(STUDY, e))?
            .json()
            .await
            .map_err(|e| FeedError::Parse(STUDY, e))?;

        debug!(windows = body.available.len(), "fetched study availability");
        Ok(body.available)
    }
}
