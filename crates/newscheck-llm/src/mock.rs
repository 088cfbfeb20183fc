//! Mock provider for deterministic testing without API calls.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use newscheck_core::errors::LlmError;
use newscheck_core::events::{ObserverSet, PipelineEvent};
use newscheck_core::provider::{
    ChatProvider, Completion, CompletionRequest, Role, TokenUsage,
};
use newscheck_core::text;

/// One pre-programmed response.
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Return this text.
    Text(String),
    /// Fail the call with this error.
    Error(LlmError),
}

impl MockResponse {
    /// Convenience: a text response.
    pub fn text(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

enum Script {
    /// Consume responses in order; error when exhausted.
    Sequence(Vec<MockResponse>),
    /// Echo the last user message back, prefixed so turns stay traceable.
    Echo,
}

/// Mock provider that replays scripted responses in sequence, or echoes
/// its input for determinism tests.
pub struct MockProvider {
    script: Script,
    call_count: AtomicUsize,
    observers: ObserverSet,
}

impl MockProvider {
    /// Provider replaying `responses` in order.
    pub fn new(responses: Vec<MockResponse>) -> Self {
        Self {
            script: Script::Sequence(responses),
            call_count: AtomicUsize::new(0),
            observers: ObserverSet::new(),
        }
    }

    /// Provider that echoes the last user message of every request.
    pub fn echo() -> Self {
        Self {
            script: Script::Echo,
            call_count: AtomicUsize::new(0),
            observers: ObserverSet::new(),
        }
    }

    /// Attach observers; the mock emits the same lifecycle events as the
    /// real provider.
    pub fn with_observers(mut self, observers: ObserverSet) -> Self {
        self.observers = observers;
        self
    }

    /// Number of `complete` calls so far.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, LlmError> {
        let idx = self.call_count.fetch_add(1, Ordering::Relaxed);

        self.observers.emit(&PipelineEvent::ModelStart {
            prompts: request.rendered_prompts(),
        });

        let text = match &self.script {
            Script::Sequence(responses) => match responses.get(idx) {
                Some(MockResponse::Text(text)) => text.clone(),
                Some(MockResponse::Error(e)) => return Err(e.clone()),
                None => {
                    return Err(LlmError::InvalidRequest(format!(
                        "MockProvider: no response configured for call {idx}"
                    )));
                }
            },
            Script::Echo => request
                .messages
                .iter()
                .rev()
                .find(|m| m.role == Role::User)
                .map(|m| format!("echo: {}", m.content))
                .unwrap_or_default(),
        };

        self.observers.emit(&PipelineEvent::ModelEnd {
            preview: text::preview(&text),
        });

        Ok(Completion {
            text,
            usage: TokenUsage::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use newscheck_core::provider::ChatMessage;

    fn request(content: &str) -> CompletionRequest {
        CompletionRequest::new(vec![
            ChatMessage::system("sys"),
            ChatMessage::user(content),
        ])
    }

    #[tokio::test]
    async fn sequential_responses() {
        let mock = MockProvider::new(vec![
            MockResponse::text("first"),
            MockResponse::text("second"),
        ]);

        assert_eq!(mock.complete(&request("a")).await.unwrap().text, "first");
        assert_eq!(mock.complete(&request("b")).await.unwrap().text, "second");
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn exhausted_responses_error() {
        let mock = MockProvider::new(vec![MockResponse::text("only one")]);
        let _ = mock.complete(&request("a")).await.unwrap();
        let err = mock.complete(&request("b")).await.unwrap_err();
        assert_matches!(err, LlmError::InvalidRequest(_));
    }

    #[tokio::test]
    async fn scripted_error() {
        let mock = MockProvider::new(vec![MockResponse::Error(LlmError::RateLimited)]);
        let err = mock.complete(&request("a")).await.unwrap_err();
        assert_matches!(err, LlmError::RateLimited);
    }

    #[tokio::test]
    async fn echo_returns_last_user_message() {
        let mock = MockProvider::echo();
        let completion = mock.complete(&request("hello there")).await.unwrap();
        assert_eq!(completion.text, "echo: hello there");
    }

    #[tokio::test]
    async fn echo_is_deterministic() {
        let a = MockProvider::echo();
        let b = MockProvider::echo();
        let req = request("same input");
        assert_eq!(
            a.complete(&req).await.unwrap().text,
            b.complete(&req).await.unwrap().text
        );
    }

    #[test]
    fn provider_properties() {
        let mock = MockProvider::new(vec![]);
        assert_eq!(mock.name(), "mock");
        assert_eq!(mock.model(), "mock-model");
    }
}
