//! Error types for the upstream feed clients.

/// Failure talking to one of the campus feeds, tagged with the feed name.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("{0} feed request failed")]
    Request(&'static str, #[source] reqwest::Error),
    #[error("{0} feed returned an error status")]
    Status(&'static str, #[source] reqwest::Error),
    #[error("failed to parse {0} feed response")]
    Parse(&'static str, #[source] reqwest::Error),
    #[error("invalid {0} feed URL")]
    Url(&'static str, #[source] url::ParseError),
}
