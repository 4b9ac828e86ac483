//! Client for the rec-center occupancy counter service.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::FeedError;
use super::names::OCCUPANCY;
use crate::schedule::OccupantRecord;

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u32,
}

#[derive(Debug, Deserialize)]
struct RecordsResponse {
    data: Vec<OccupantRecord>,
}

/// Client for the turnstile counter service.
///
/// The upstream exposes its read endpoints as POSTs with empty bodies; the
/// shape is theirs, not ours.
pub struct OccupancyClient {
    client: reqwest::Client,
    base_url: Url,
}

impl OccupancyClient {
    pub fn new(base_url: Url) -> Result<Self> {
        Ok(Self {
            client: super::http_client().context("Failed to build occupancy HTTP client")?,
            base_url,
        })
    }

    /// The live headcount inside the building.
    pub async fn live_count(&self) -> Result<u32, FeedError> {
        let url = self
            .base_url
            .join("now")
            .map_err(|e| FeedError::Url(OCCUPANCY, e))?;

        let body: CountResponse = self
            .client
            .post(url)
            .send()
            .await
            .map_err(|e| FeedError::Request(OCCUPANCY, e))?
            .error_for_status()
            .map_err(|e| FeedError::Status(OCCUPANCY, e))?
            .json()
            .await
            .map_err(|e| FeedError::Parse(OCCUPANCY, e))?;

        debug!(count = body.count, "fetched live occupancy");
        Ok(body.count)
    }

    /// Historical per-15-minute averages for today's weekday.
    pub async fn today_averages(&self) -> Result<Vec<OccupantRecord>, FeedError> {
        let url = self
            .base_url
            .join("today/avg")
            .map_err(|e| FeedError::Url(OCCUPANCY, e))?;

        let body: RecordsResponse = self
            .client
            .post(url)
            .send()
            .await
            .map_err(|e| FeedError::Request(OCCUPANCY, e))?
            .error_for_status()
            .map_err(|e| FeedError::Status(OCCUPANCY, e))?
            .json()
            .await
            .map_err(|e| FeedError::Parse(OCCUPANCY, e))?;

        Ok(body.data)
    }
}
