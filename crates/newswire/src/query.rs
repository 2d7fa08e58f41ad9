//! Query configuration and request-URL building

use crate::error::FetchError;
use crate::types::OrderBy;
use serde::{Deserialize, Serialize};
use url::Url;

/// Section searched when the caller does not override it
pub const DEFAULT_SECTION: &str = "film";

/// Earliest publication date included by default (YYYY-MM-DD)
pub const DEFAULT_FROM_DATE: &str = "2010-01-01";

/// Search term used when the caller does not override it
pub const DEFAULT_SEARCH_TERM: &str = "Marvel";

/// Configuration for one search request
///
/// Built once per fetch invocation by the caller, typically from persisted
/// settings. `to_params` yields the full wire parameter list; the
/// `show-tags` and `show-elements` parameters are fixed because the parser
/// depends on contributor tags being present in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchQuery {
    /// Result ordering (`order-by`)
    pub order_by: OrderBy,

    /// Section filter (`section`)
    pub section: String,

    /// Minimum publication date (`from-date`)
    pub from_date: String,

    /// Search term (`q`)
    pub search_term: String,

    /// API key (`api-key`)
    pub api_key: String,
}

impl FetchQuery {
    /// Create a query with the default ordering, section, date and term
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            order_by: OrderBy::default(),
            section: DEFAULT_SECTION.to_string(),
            from_date: DEFAULT_FROM_DATE.to_string(),
            search_term: DEFAULT_SEARCH_TERM.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Set the result ordering
    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    /// Set the section filter
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Set the minimum publication date
    pub fn from_date(mut self, from_date: impl Into<String>) -> Self {
        self.from_date = from_date.into();
        self
    }

    /// Set the search term
    pub fn search_term(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self
    }

    /// Wire parameters in the order they are appended to the URL
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("order-by", self.order_by.to_string()),
            ("section", self.section.clone()),
            ("from-date", self.from_date.clone()),
            ("show-tags", "contributor".to_string()),
            ("show-elements", "all".to_string()),
            ("q", self.search_term.clone()),
            ("api-key", self.api_key.clone()),
        ]
    }
}

/// Append ordered, percent-encoded query parameters to a base endpoint
///
/// Parameter values are taken as supplied; no validation is performed.
/// The only failure mode is a base endpoint that does not parse.
pub fn build_url(base: &str, params: &[(&str, String)]) -> Result<Url, FetchError> {
    let mut url = Url::parse(base).map_err(FetchError::InvalidUrl)?;
    url.query_pairs_mut()
        .extend_pairs(params.iter().map(|(name, value)| (*name, value.as_str())));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = FetchQuery::new("key");
        assert_eq!(query.order_by, OrderBy::Newest);
        assert_eq!(query.section, "film");
        assert_eq!(query.from_date, "2010-01-01");
        assert_eq!(query.search_term, "Marvel");
        assert_eq!(query.api_key, "key");
    }

    #[test]
    fn test_query_builder() {
        let query = FetchQuery::new("key")
            .order_by(OrderBy::Relevance)
            .section("books")
            .from_date("2020-06-01")
            .search_term("Dune");

        assert_eq!(query.order_by, OrderBy::Relevance);
        assert_eq!(query.section, "books");
        assert_eq!(query.from_date, "2020-06-01");
        assert_eq!(query.search_term, "Dune");
    }

    #[test]
    fn test_to_params_order() {
        let params = FetchQuery::new("key").to_params();
        let names: Vec<&str> = params.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "order-by",
                "section",
                "from-date",
                "show-tags",
                "show-elements",
                "q",
                "api-key"
            ]
        );
    }

    #[test]
    fn test_build_url_appends_in_order() {
        let url = build_url(
            "https://content.guardianapis.com/search",
            &FetchQuery::new("key").to_params(),
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://content.guardianapis.com/search\
             ?order-by=newest&section=film&from-date=2010-01-01\
             &show-tags=contributor&show-elements=all&q=Marvel&api-key=key"
        );
    }

    #[test]
    fn test_build_url_percent_encodes_values() {
        let url = build_url(
            "https://example.com/search",
            &[("q", "Marvel movies & more".to_string())],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/search?q=Marvel+movies+%26+more"
        );
    }

    #[test]
    fn test_build_url_invalid_base() {
        let result = build_url("not a url", &[]);
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }
}
