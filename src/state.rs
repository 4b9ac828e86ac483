//! Application state shared across request handlers.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use dashmap::DashMap;
use serde::Serialize;
use ts_rs::TS;

use crate::config::Config;
use crate::feeds::{OccupancyClient, RatingsClient, SignageClient, StudyClient};
use crate::schedule::ScheduleTable;
use crate::{campus, feeds};

/// Health of an upstream feed, as observed by the most recent call.
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FeedStatus {
    /// No call has completed yet this process.
    Unknown,
    Active,
    Error,
}

/// A timestamped status entry for a feed.
#[derive(Debug, Clone)]
pub struct StatusEntry {
    pub status: FeedStatus,
    #[allow(dead_code)]
    pub updated_at: Instant,
}

/// Thread-safe registry where handlers record feed health after each call.
#[derive(Debug, Clone, Default)]
pub struct FeedStatusRegistry {
    inner: Arc<DashMap<String, StatusEntry>>,
}

impl FeedStatusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or updates the status for a named feed.
    pub fn set(&self, name: &str, status: FeedStatus) {
        self.inner.insert(
            name.to_owned(),
            StatusEntry {
                status,
                updated_at: Instant::now(),
            },
        );
    }

    /// Record the outcome of one feed call.
    pub fn observe<T, E>(&self, name: &str, result: &Result<T, E>) {
        match result {
            Ok(_) => self.set(name, FeedStatus::Active),
            Err(_) => self.set(name, FeedStatus::Error),
        }
    }

    /// Returns a snapshot of all feed statuses.
    pub fn all(&self) -> Vec<(String, FeedStatus)> {
        self.inner
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().status.clone()))
            .collect()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub signage: Arc<SignageClient>,
    pub occupancy: Arc<OccupancyClient>,
    pub study: Arc<StudyClient>,
    pub ratings: Arc<RatingsClient>,
    /// Compiled rec facility hours, loaded once.
    pub rec_hours: Arc<ScheduleTable>,
    /// Compiled dining meal-phase hours, loaded once.
    pub dining_hours: Arc<ScheduleTable>,
    pub feed_statuses: FeedStatusRegistry,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let feed_statuses = FeedStatusRegistry::new();
        for name in [
            feeds::names::SIGNAGE,
            feeds::names::OCCUPANCY,
            feeds::names::STUDY,
            feeds::names::RATINGS,
        ] {
            feed_statuses.set(name, FeedStatus::Unknown);
        }

        Ok(Self {
            signage: Arc::new(SignageClient::new(config.signage_host.clone())?),
            occupancy: Arc::new(OccupancyClient::new(config.occupancy_host.clone())?),
            study: Arc::new(StudyClient::new(config.study_host.clone())?),
            ratings: Arc::new(RatingsClient::new(config.ratings_host.clone())?),
            rec_hours: Arc::new(campus::rec::standard_hours()),
            dining_hours: Arc::new(campus::dining::standard_hours()),
            feed_statuses,
        })
    }
}
