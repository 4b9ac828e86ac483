//! Environment-driven application configuration.

use serde::Deserialize;
use url::Url;

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_shutdown_timeout() -> u64 {
    10
}

fn default_signage_host() -> Url {
    Url::parse("http://localhost:7071/").expect("default signage host is valid")
}

fn default_occupancy_host() -> Url {
    Url::parse("http://localhost:7072/").expect("default occupancy host is valid")
}

fn default_study_host() -> Url {
    Url::parse("http://localhost:7073/").expect("default study host is valid")
}

fn default_ratings_host() -> Url {
    Url::parse("http://localhost:7074/").expect("default ratings host is valid")
}

/// Application configuration, extracted from the environment via figment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Seconds to let in-flight requests drain on shutdown.
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
    #[serde(default = "default_signage_host")]
    pub signage_host: Url,
    #[serde(default = "default_occupancy_host")]
    pub occupancy_host: Url,
    #[serde(default = "default_study_host")]
    pub study_host: Url,
    #[serde(default = "default_ratings_host")]
    pub ratings_host: Url,
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, figment::Error> {
        use figment::Figment;
        use figment::providers::Env;

        Figment::new().merge(Env::raw()).extract()
    }
}
