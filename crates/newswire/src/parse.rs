//! Search-response decoding and normalization
//!
//! The API wraps results as `{ "response": { "results": [ ... ] } }`. A
//! shape mismatch anywhere in that chain fails the whole batch; only the
//! publication date is allowed to fail per item, leaving the timestamp
//! unset for that record.
//!
//! Byline quirk: the author string joins the capitalized first and last
//! name with a single space even when one of them is blank, so a tag with
//! only a first name yields `"Author: Jane "` with a trailing space. The
//! join is kept exactly as existing callers see it rather than trimmed.

use crate::error::FetchError;
use crate::types::Article;
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::warn;

/// Expected layout of `webPublicationDate`. The live API appends a `Z`
/// suffix; anything past the pattern is ignored.
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Literal prefix of every non-empty byline
const AUTHOR_PREFIX: &str = "Author: ";

/// Search API response envelope (partial)
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchBody,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    results: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItem {
    web_title: String,
    section_name: String,
    /// Contributor tags; elements can be JSON `null`
    tags: Vec<Option<ContributorTag>>,
    web_publication_date: String,
    web_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributorTag {
    first_name: Option<String>,
    last_name: Option<String>,
}

/// Decode a raw response body into normalized articles
///
/// An empty body yields an empty list without error. Any structural
/// mismatch aborts the entire batch with [`FetchError::Structure`]; partial
/// results are not salvaged.
pub fn parse_articles(body: &str) -> Result<Vec<Article>, FetchError> {
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let envelope: SearchEnvelope =
        serde_json::from_str(body).map_err(FetchError::Structure)?;

    Ok(envelope
        .response
        .results
        .into_iter()
        .map(normalize_item)
        .collect())
}

/// Convert one decoded result into an [`Article`]
fn normalize_item(item: SearchItem) -> Article {
    let author = item
        .tags
        .first()
        .and_then(|tag| tag.as_ref())
        .map(format_author)
        .unwrap_or_default();

    let publication_time = parse_publication_date(&item.web_publication_date);

    Article {
        author,
        title: item.web_title,
        section_name: item.section_name,
        publication_time,
        url: item.web_url,
    }
}

/// Derive the byline from the first contributor tag
fn format_author(tag: &ContributorTag) -> String {
    let first = capitalize(tag.first_name.as_deref().unwrap_or(""));
    let last = capitalize(tag.last_name.as_deref().unwrap_or(""));

    if first.is_empty() && last.is_empty() {
        String::new()
    } else {
        format!("{}{} {}", AUTHOR_PREFIX, first, last)
    }
}

/// Trim, lowercase, then uppercase the first letter
fn capitalize(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse a publication date, ignoring anything past the expected pattern
///
/// Failure is scoped to the field: the record keeps `None` and the batch
/// continues.
fn parse_publication_date(raw: &str) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_and_remainder(raw, DATE_FORMAT) {
        Ok((parsed, _remainder)) => Some(parsed),
        Err(e) => {
            warn!(date = raw, error = %e, "Problem parsing the publication date");
            None
        }
    }
}
