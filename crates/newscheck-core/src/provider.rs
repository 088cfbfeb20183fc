//! Chat-completion provider trait and request/response types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::LlmError;

/// Role of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in a chat-completion request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Build a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Build a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Build an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Render as `role: content` for event payloads.
    pub fn render(&self) -> String {
        let role = match self.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        format!("{role}: {}", self.content)
    }
}

/// A structured message sequence sent to the completion service.
#[derive(Clone, Debug, Default)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// Build a request from a message sequence.
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// Render every message for the `ModelStart` event payload.
    pub fn rendered_prompts(&self) -> Vec<String> {
        self.messages.iter().map(ChatMessage::render).collect()
    }
}

/// Token usage reported by the completion service. Logged, otherwise ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Result of one completed chat-completion call.
#[derive(Clone, Debug)]
pub struct Completion {
    /// The generated text.
    pub text: String,
    /// Usage metadata, if the service reported any.
    pub usage: TokenUsage,
}

/// Trait implemented by each completion provider (OpenAI, mock).
///
/// Implementations emit `ModelStart` before issuing the request and
/// `ModelEnd` after the response arrives. Failures propagate to the caller;
/// providers perform no retry and no fallback model.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Model identifier requests are issued against.
    fn model(&self) -> &str;

    /// Issue one chat-completion request and return the generated text.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors() {
        assert_eq!(ChatMessage::system("a").role, Role::System);
        assert_eq!(ChatMessage::user("b").role, Role::User);
        assert_eq!(ChatMessage::assistant("c").role, Role::Assistant);
    }

    #[test]
    fn role_serde() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), r#""system""#);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            r#""assistant""#
        );
    }

    #[test]
    fn rendered_prompts_keep_order() {
        let req = CompletionRequest::new(vec![
            ChatMessage::system("rules"),
            ChatMessage::user("question"),
        ]);
        assert_eq!(
            req.rendered_prompts(),
            vec!["system: rules".to_string(), "user: question".to_string()]
        );
    }

    #[test]
    fn usage_defaults_when_fields_missing() {
        let usage: TokenUsage = serde_json::from_str(r#"{"total_tokens": 10}"#).unwrap();
        assert_eq!(usage.prompt_tokens, 0);
        assert_eq!(usage.total_tokens, 10);
    }
}
