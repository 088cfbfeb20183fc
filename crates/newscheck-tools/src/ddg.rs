//! DuckDuckGo-style web-search backend adapter.
//!
//! The backend speaks `{"results": [{"title", "body", "href"}, …]}`; this
//! adapter translates `body`/`href` into the internal `snippet`/`url`
//! fields and caps the list at [`MAX_RESULTS`].

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use newscheck_core::errors::SearchError;
use newscheck_core::search::{MAX_RESULTS, SearchBackend, SearchOutcome, SearchResult};

const DEFAULT_BASE_URL: &str = "https://api.duckduckgo.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the search backend.
pub struct DdgSearchClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for DdgSearchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DdgSearchClient {
    /// Client against the default backend endpoint.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .user_agent("newscheck/0.1")
                .build()
                .expect("failed to build HTTP client"),
            base_url: DEFAULT_BASE_URL.into(),
        }
    }

    /// Override the backend base URL (tests point this at a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Translate one backend record. Missing fields default to empty strings;
/// a malformed record never aborts the query.
fn to_search_result(record: &Value) -> SearchResult {
    let field = |name: &str| {
        record
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    };
    SearchResult {
        title: field("title"),
        snippet: field("body"),
        url: field("href"),
    }
}

#[async_trait]
impl SearchBackend for DdgSearchClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let resp = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query), ("max_results", &MAX_RESULTS.to_string())])
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;

        let results: Vec<SearchResult> = body
            .get("results")
            .and_then(Value::as_array)
            .map(|records| records.iter().take(MAX_RESULTS).map(to_search_result).collect())
            .unwrap_or_default();

        debug!(count = results.len(), "search completed");

        if results.is_empty() {
            Ok(SearchOutcome::NoResults)
        } else {
            Ok(SearchOutcome::Results(results))
        }
    }
}
