//! The web-search tool exposed to stages.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use newscheck_core::search::{SearchBackend, SearchOutcome};
use newscheck_core::tools::{Tool, ToolError};

/// Sentinel returned when the backend matched nothing, so downstream
/// consumers can distinguish "searched, found nothing" from "did not
/// search."
pub const NO_RESULTS: &str = "No results found.";

/// Search capability over a [`SearchBackend`].
pub struct SearchTool {
    backend: Arc<dyn SearchBackend>,
}

impl SearchTool {
    /// Wrap a backend.
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        "DuckDuckGo Search"
    }

    fn description(&self) -> &str {
        "Search DuckDuckGo for recent results. Returns a JSON list of \
         results, each with the 'title', 'snippet', and 'url' of a match."
    }

    async fn invoke(&self, input: &str) -> Result<String, ToolError> {
        let query = input.trim();
        if query.is_empty() {
            return Err(ToolError::InvalidInput("empty search query".into()));
        }

        info!(query, "searching");

        let outcome = self
            .backend
            .search(query)
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        match outcome {
            SearchOutcome::NoResults => Ok(NO_RESULTS.into()),
            SearchOutcome::Results(results) => serde_json::to_string(&results)
                .map_err(|e| ToolError::ExecutionFailed(e.to_string())),
        }
    }
}
