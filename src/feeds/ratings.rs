//! Client for the professor rating service.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use super::FeedError;
use super::names::RATINGS;
use crate::ratings::RatingReport;

/// Client for the rating service's per-identifier report endpoint.
pub struct RatingsClient {
    client: reqwest::Client,
    base_url: Url,
}

impl RatingsClient {
    pub fn new(base_url: Url) -> Result<Self> {
        Ok(Self {
            client: super::http_client().context("Failed to build ratings HTTP client")?,
            base_url,
        })
    }

    /// Fetch the report filed under one identifier.
    ///
    /// Identifiers with no report 404 upstream; that is "not rated", not a
    /// failure, so it maps to `Ok(None)`.
    pub async fn report(&self, id: &str) -> Result<Option<RatingReport>, FeedError> {
        let url = self
            .base_url
            .join(&format!("professors/{id}"))
            .map_err(|e| FeedError::Url(RATINGS, e))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Request(RATINGS, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(id, "no rating report filed under identifier");
            return Ok(None);
        }

        let report: RatingReport = response
            .error_for_status()
            .map_err(|e| FeedError::Status(RATINGS, e))?
            .json()
            .await
            .map_err(|e| FeedError::Parse(RATINGS, e))?;

        Ok(Some(report))
    }
}
