//! Assembles the three-stage research pipeline for a topic.

use std::sync::Arc;

use newscheck_core::events::ObserverSet;
use newscheck_core::provider::ChatProvider;
use newscheck_core::search::SearchBackend;
use newscheck_runtime::{Agent, AgentConfig, Pipeline, Task};
use newscheck_tools::{SearchTool, ToolRegistry};

/// Join command-line words into a topic. Returns `None` when the words are
/// missing or blank.
pub fn join_topic(words: &[String]) -> Option<String> {
    let topic = words.join(" ").trim().to_string();
    if topic.is_empty() { None } else { Some(topic) }
}

/// Build the search → summarize → fact-check pipeline.
///
/// All three stages share one model client and one observer list. The
/// searcher and fact checker share one search tool; the summarizer works
/// from context alone.
pub fn build_pipeline(
    topic: &str,
    client: Arc<dyn ChatProvider>,
    backend: Arc<dyn SearchBackend>,
    observers: &ObserverSet,
) -> Pipeline {
    let mut tools = ToolRegistry::new();
    tools.register(Arc::new(SearchTool::new(backend)));

    let searcher = Arc::new(
        Agent::new(
            AgentConfig::new(
                "News Searcher",
                format!(
                    "Find the top 3 most relevant news articles on \"{topic}\" from DuckDuckGo."
                ),
                "An expert in using DuckDuckGo to find the most relevant and \
                 up-to-date news articles.",
            ),
            Arc::clone(&client),
            observers.clone(),
        )
        .with_tools(tools.clone()),
    );

    let summarizer = Arc::new(Agent::new(
        AgentConfig::new(
            "News Summarizer",
            "Summarize the provided news articles, capturing the main ideas.",
            "A skilled writer who can distill complex news into clear, concise summaries.",
        ),
        Arc::clone(&client),
        observers.clone(),
    ));

    let fact_checker = Arc::new(
        Agent::new(
            AgentConfig::new(
                "Fact Checker",
                "Identify 2-3 factual claims from the summary and verify them \
                 using DuckDuckGo searches.",
                "A meticulous fact-checker who verifies information by \
                 cross-referencing multiple sources.",
            ),
            client,
            observers.clone(),
        )
        .with_tools(tools),
    );

    Pipeline::new(vec![
        Task::new(
            format!(
                "Search for the top 3 most relevant news articles about \
                 \"{topic}\". Return the titles, snippets, and URLs."
            ),
            "A list of 3 news articles with their titles, snippets, and URLs.",
            searcher,
        ),
        Task::new(
            "Summarize the main ideas from the search results. Focus on the \
             key points and developments.",
            "A concise summary of the main ideas from the news articles.",
            summarizer,
        ),
        Task::new(
            "Identify 2-3 specific factual claims from the summary. For each \
             claim, search for verification and mark it as \"Supported\", \
             \"Contradicted\", or \"Unconfirmed\".",
            "A fact-checking report with 2-3 claims, each marked as Supported, \
             Contradicted, or Unconfirmed with brief explanations.",
            fact_checker,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use newscheck_core::errors::{LlmError, SearchError};
    use newscheck_core::provider::{Completion, CompletionRequest, TokenUsage};
    use newscheck_core::search::SearchOutcome;

    #[test]
    fn topic_joins_words() {
        let words = vec!["quantum".to_string(), "computing".to_string()];
        assert_eq!(join_topic(&words), Some("quantum computing".to_string()));
    }

    #[test]
    fn blank_topic_rejected() {
        assert_eq!(join_topic(&[]), None);
        assert_eq!(join_topic(&["  ".to_string()]), None);
    }

    struct StubClient;

    #[async_trait]
    impl ChatProvider for StubClient {
        fn name(&self) -> &str {
            "stub"
        }
        fn model(&self) -> &str {
            "stub"
        }
        async fn complete(&self, _request: &CompletionRequest) -> Result<Completion, LlmError> {
            Ok(Completion {
                text: "Final Answer: done".into(),
                usage: TokenUsage::default(),
            })
        }
    }

    struct StubBackend;

    #[async_trait]
    impl SearchBackend for StubBackend {
        async fn search(&self, _query: &str) -> Result<SearchOutcome, SearchError> {
            Ok(SearchOutcome::NoResults)
        }
    }

    #[tokio::test]
    async fn pipeline_has_three_tasks_and_runs() {
        let mut pipeline = build_pipeline(
            "fusion energy",
            Arc::new(StubClient),
            Arc::new(StubBackend),
            &ObserverSet::new(),
        );
        assert_eq!(pipeline.states().len(), 3);

        let report = pipeline.kickoff().await.unwrap();
        assert_eq!(report, "done");
        assert_eq!(pipeline.context().len(), 3);
    }
}
