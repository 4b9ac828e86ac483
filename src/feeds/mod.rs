//! REST clients for the upstream campus feeds.
//!
//! Each upstream gets a thin client: a shared `reqwest::Client`, a base
//! URL, and typed responses. Feed failures are never fatal: handlers
//! degrade to empty data and flip the feed's status registry entry.

pub mod error;
pub mod occupancy;
pub mod ratings;
pub mod signage;
pub mod study;

use std::time::Duration;

pub use error::FeedError;
pub use occupancy::OccupancyClient;
pub use ratings::RatingsClient;
pub use signage::SignageClient;
pub use study::StudyClient;

/// Registry names for feed health reporting.
pub mod names {
    pub const SIGNAGE: &str = "signage";
    pub const OCCUPANCY: &str = "occupancy";
    pub const STUDY: &str = "study";
    pub const RATINGS: &str = "ratings";
}

/// Upstream request timeout shared by every feed client.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the HTTP client used by the feed clients.
pub(crate) fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("quad/", env!("CARGO_PKG_VERSION")))
        .build()
}
