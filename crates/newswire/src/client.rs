//! HTTP client and fetch orchestration for Newswire
//!
//! [`NewsClient`] runs the whole pipeline: build the search URL, perform
//! the GET, decode the body. Its surface never fails; any internal error
//! is logged and collapses to an empty article list, which callers render
//! as "no results".

use crate::error::FetchError;
use crate::parse::parse_articles;
use crate::query::{build_url, FetchQuery};
use crate::types::Article;
use crate::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Connect timeout for the search request
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Deadline for reading the response body
const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch articles for a query using a default client
///
/// Convenience wrapper over [`NewsClient::fetch_articles`]. For a custom
/// endpoint or user agent, configure a client via [`NewsClient::builder`].
pub async fn fetch_articles(query: &FetchQuery) -> Vec<Article> {
    NewsClient::default().fetch_articles(query).await
}

/// Builder for configuring a [`NewsClient`]
#[derive(Debug, Clone)]
pub struct NewsClientBuilder {
    endpoint: String,
    user_agent: Option<String>,
}

impl Default for NewsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsClientBuilder {
    /// Create a builder pointing at the default search endpoint
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: None,
        }
    }

    /// Override the search endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set a custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Build the client
    pub fn build(self) -> NewsClient {
        NewsClient {
            endpoint: self.endpoint,
            user_agent: self.user_agent,
        }
    }
}

/// Configured news search client
///
/// Cheap to clone; every fetch builds its own connection and holds no
/// state across invocations.
#[derive(Debug, Clone)]
pub struct NewsClient {
    endpoint: String,
    user_agent: Option<String>,
}

impl Default for NewsClient {
    fn default() -> Self {
        NewsClientBuilder::new().build()
    }
}

impl NewsClient {
    /// Create a new client builder
    pub fn builder() -> NewsClientBuilder {
        NewsClientBuilder::new()
    }

    /// Fetch and normalize articles for the given query
    ///
    /// Never fails: a bad endpoint, transport failure, non-200 status or
    /// malformed response is logged and yields an empty list. The caller
    /// cannot distinguish those cases from zero matching articles without
    /// consulting the logs.
    pub async fn fetch_articles(&self, query: &FetchQuery) -> Vec<Article> {
        let url = match build_url(&self.endpoint, &query.to_params()) {
            Ok(url) => url,
            Err(e) => {
                error!(endpoint = %self.endpoint, error = %e, "Problem building the request URL");
                return Vec::new();
            }
        };

        debug!(url = %url, "Requesting search results");

        let body = match self.http_get(url.as_str()).await {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "Problem making the HTTP request");
                String::new()
            }
        };

        match parse_articles(&body) {
            Ok(articles) => articles,
            Err(e) => {
                error!(error = %e, "Problem parsing the search results");
                Vec::new()
            }
        }
    }

    /// Run the fetch on a background task
    ///
    /// The result is delivered exactly once through the returned handle.
    /// A caller superseded by a newer request simply drops the handle; the
    /// stale result is discarded with it.
    pub fn spawn_fetch(&self, query: FetchQuery) -> JoinHandle<Vec<Article>> {
        let client = self.clone();
        tokio::spawn(async move { client.fetch_articles(&query).await })
    }

    /// Perform a single GET and return the body text
    ///
    /// An empty URL short-circuits to an empty body without touching the
    /// network. Only status 200 produces a body; every other status is an
    /// error carrying the code. No retries.
    async fn http_get(&self, url: &str) -> Result<String, FetchError> {
        if url.is_empty() {
            return Ok(String::new());
        }

        let mut headers = HeaderMap::new();
        let user_agent = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()
            .map_err(FetchError::ClientBuild)?;

        let response = client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchError::HttpStatus(status));
        }

        read_body_with_deadline(response, READ_TIMEOUT).await
    }
}

/// Read the response body within a deadline
///
/// The connection is released on every exit path when the response is
/// dropped. Expiry or a mid-stream failure fails the read; no partial body
/// is returned.
async fn read_body_with_deadline(
    response: reqwest::Response,
    timeout: Duration,
) -> Result<String, FetchError> {
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    let deadline = tokio::time::Instant::now() + timeout;

    loop {
        tokio::select! {
            chunk = stream.next() => {
                match chunk {
                    Some(Ok(bytes)) => body.extend_from_slice(&bytes),
                    Some(Err(e)) => return Err(FetchError::from_reqwest(e)),
                    None => return Ok(String::from_utf8_lossy(&body).into_owned()),
                }
            }
            _ = tokio::time::sleep_until(deadline) => {
                return Err(FetchError::Timeout);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = NewsClient::default();
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
        assert!(client.user_agent.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let client = NewsClient::builder()
            .endpoint("http://localhost:9/search")
            .user_agent("TestAgent/1.0")
            .build();
        assert_eq!(client.endpoint, "http://localhost:9/search");
        assert_eq!(client.user_agent, Some("TestAgent/1.0".to_string()));
    }

    #[tokio::test]
    async fn test_http_get_empty_url_skips_network() {
        let client = NewsClient::default();
        let body = client.http_get("").await.unwrap();
        assert!(body.is_empty());
    }
}
