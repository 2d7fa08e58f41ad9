//! Error types for Newswire

use thiserror::Error;

/// Errors that can occur while fetching and decoding the news feed
#[derive(Debug, Error)]
pub enum FetchError {
    /// The base endpoint could not be parsed into a URL
    #[error("Invalid request URL")]
    InvalidUrl(#[source] url::ParseError),

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Failed to connect to server
    #[error("Failed to connect to server")]
    Connect(#[source] reqwest::Error),

    /// Request or body read exceeded its timeout
    #[error("Request timed out")]
    Timeout,

    /// Other transport failure (DNS, stream read, protocol error)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a status other than 200
    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// Response JSON did not match the expected search-result shape
    #[error("Malformed search response")]
    Structure(#[source] serde_json::Error),
}

impl FetchError {
    /// Classify an error from a reqwest call
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connect(err)
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
