//! Search records and the web-search backend seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::SearchError;

/// Maximum number of results a search returns.
pub const MAX_RESULTS: usize = 3;

/// One web-search result, in the backend's relevance order.
///
/// Fields default to empty strings: a backend record missing a field must
/// not abort the overall query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub url: String,
}

/// Outcome of one search query.
///
/// Zero backend matches yield [`SearchOutcome::NoResults`], never an empty
/// vector, so consumers can distinguish "searched, found nothing" from
/// "did not search."
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 1 to [`MAX_RESULTS`] results in provider relevance order.
    Results(Vec<SearchResult>),
    /// The backend matched nothing.
    NoResults,
}

/// Trait implemented by the web-search backend adapter.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run one query. Transport failures propagate; the caller decides how
    /// to surface them.
    async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let result: SearchResult =
            serde_json::from_str(r#"{"title": "Headline"}"#).unwrap();
        assert_eq!(result.title, "Headline");
        assert_eq!(result.snippet, "");
        assert_eq!(result.url, "");
    }

    #[test]
    fn result_round_trips() {
        let result = SearchResult {
            title: "t".into(),
            snippet: "s".into(),
            url: "https://example.com".into(),
        };
        let json = serde_json::to_string(&result).unwrap();
        let parsed: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn no_results_is_distinct_from_empty() {
        assert_ne!(SearchOutcome::NoResults, SearchOutcome::Results(vec![]));
    }
}
