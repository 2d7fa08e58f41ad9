//! Newswire - Guardian content-API news fetching library
//!
//! This crate fetches a news feed from the Guardian search API and turns
//! the nested JSON response into a flat list of normalized [`Article`]
//! records, ready for display.
//!
//! ## Pipeline
//!
//! One fetch invocation runs three steps in sequence:
//! 1. build the request URL from a [`FetchQuery`] ([`query::build_url`]),
//! 2. perform the GET with fixed connect/read timeouts,
//! 3. decode and normalize the response ([`parse_articles`]).
//!
//! The caller-facing surface never fails: [`NewsClient::fetch_articles`]
//! returns an empty list on any internal error and logs the diagnostic via
//! `tracing`. Use [`NewsClient::spawn_fetch`] to run the pipeline off the
//! caller's task and drop the handle to abandon a superseded request.

pub mod client;
mod error;
mod parse;
pub mod query;
mod types;

pub use client::{fetch_articles, NewsClient, NewsClientBuilder};
pub use error::FetchError;
pub use parse::parse_articles;
pub use query::{build_url, FetchQuery, DEFAULT_FROM_DATE, DEFAULT_SECTION, DEFAULT_SEARCH_TERM};
pub use types::{Article, OrderBy};

/// Default search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://content.guardianapis.com/search";

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Newswire/0.1";
