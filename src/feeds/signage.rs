//! Client for the building signage feed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::FeedError;
use super::names::SIGNAGE;
use crate::schedule::EventRecord;

/// One room's sign: its event list for the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignEntry {
    /// Sign title, `{BUILDING}_{ROOM}`.
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<EventRecord>,
}

/// Per-sign item counts from the stats endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SignMeta {
    pub name: String,
    pub slug: String,
    pub items: usize,
}

#[derive(Debug, Deserialize)]
struct SiteSignsResponse {
    sites: Vec<SignEntry>,
}

#[derive(Debug, Deserialize)]
struct SignStatsResponse {
    stats: Vec<SignMeta>,
}

/// Client for the digital-signage aggregation service.
pub struct SignageClient {
    client: reqwest::Client,
    base_url: Url,
}

impl SignageClient {
    pub fn new(base_url: Url) -> Result<Self> {
        Ok(Self {
            client: super::http_client().context("Failed to build signage HTTP client")?,
            base_url,
        })
    }

    /// Fetch every sign registered for a building site code.
    pub async fn signs_for_site(&self, site: &str) -> Result<Vec<SignEntry>, FeedError> {
        let url = self
            .base_url
            .join(&format!("sign/site/{site}"))
            .map_err(|e| FeedError::Url(SIGNAGE, e))?;

        let body: SiteSignsResponse = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Request(SIGNAGE, e))?
            .error_for_status()
            .map_err(|e| FeedError::Status(SIGNAGE, e))?
            .json()
            .await
            .map_err(|e| FeedError::Parse(SIGNAGE, e))?;

        debug!(site, signs = body.sites.len(), "fetched signage entries");
        Ok(body.sites)
    }

    /// Fetch item counts for every known sign.
    pub async fn sign_stats(&self) -> Result<Vec<SignMeta>, FeedError> {
        let url = self
            .base_url
            .join("sign/stats")
            .map_err(|e| FeedError::Url(SIGNAGE, e))?;

        let body: SignStatsResponse = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Request(SIGNAGE, e))?
            .error_for_status()
            .map_err(|e| FeedError::Status(SIGNAGE, e))?
            .json()
            .await
            .map_err(|e| FeedError::Parse(SIGNAGE, e))?;

        Ok(body.stats)
    }
}
