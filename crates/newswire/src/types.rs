//! Core types for Newswire

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Result ordering accepted by the search API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    /// Most recently published first
    #[default]
    Newest,
    /// Oldest first
    Oldest,
    /// Best match for the search term first
    Relevance,
}

impl FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(OrderBy::Newest),
            "oldest" => Ok(OrderBy::Oldest),
            "relevance" => Ok(OrderBy::Relevance),
            _ => Err("Invalid ordering: must be newest, oldest or relevance".to_string()),
        }
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderBy::Newest => write!(f, "newest"),
            OrderBy::Oldest => write!(f, "oldest"),
            OrderBy::Relevance => write!(f, "relevance"),
        }
    }
}

/// One normalized news item from a search response
///
/// Instances are produced by the response parser only, one per API result,
/// in response order. They are plain immutable values; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Display byline, either empty or `"Author: "` followed by the
    /// capitalized contributor name
    pub author: String,

    /// Article headline (`webTitle`)
    pub title: String,

    /// Section label (`sectionName`)
    pub section_name: String,

    /// Publication timestamp, `None` when the source date string did not
    /// match the expected format
    pub publication_time: Option<NaiveDateTime>,

    /// Web address of the full article (`webUrl`)
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by_from_str() {
        assert_eq!(OrderBy::from_str("newest").unwrap(), OrderBy::Newest);
        assert_eq!(OrderBy::from_str("NEWEST").unwrap(), OrderBy::Newest);
        assert_eq!(OrderBy::from_str("oldest").unwrap(), OrderBy::Oldest);
        assert_eq!(OrderBy::from_str("Relevance").unwrap(), OrderBy::Relevance);
        assert!(OrderBy::from_str("alphabetical").is_err());
        assert!(OrderBy::from_str("").is_err());
    }

    #[test]
    fn test_order_by_display() {
        assert_eq!(OrderBy::Newest.to_string(), "newest");
        assert_eq!(OrderBy::Oldest.to_string(), "oldest");
        assert_eq!(OrderBy::Relevance.to_string(), "relevance");
    }

    #[test]
    fn test_order_by_default() {
        assert_eq!(OrderBy::default(), OrderBy::Newest);
    }

    #[test]
    fn test_article_serialization() {
        let article = Article {
            author: "Author: Jane Doe".to_string(),
            title: "T1".to_string(),
            section_name: "Film".to_string(),
            publication_time: None,
            url: "http://x/1".to_string(),
        };
        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains("\"title\":\"T1\""));
        assert!(json.contains("\"publication_time\":null"));
    }
}
