//! OpenAI chat-completions provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use newscheck_core::errors::LlmError;
use newscheck_core::events::{ObserverSet, PipelineEvent};
use newscheck_core::provider::{ChatProvider, Completion, CompletionRequest, TokenUsage};
use newscheck_core::text;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_TEMPERATURE: f64 = 0.3;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the OpenAI provider: credential, model identifier,
/// and sampling temperature. Loaded once at process start and passed in;
/// no global state thereafter.
#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
}

impl LlmConfig {
    /// Config with the default model and temperature.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// OpenAI-backed [`ChatProvider`].
pub struct OpenAiProvider {
    client: reqwest::Client,
    config: LlmConfig,
    base_url: String,
    observers: ObserverSet,
}

impl OpenAiProvider {
    /// Create a provider with the given config and observer list.
    pub fn new(config: LlmConfig, observers: ObserverSet) -> Self {
        Self {
            client: reqwest::Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            config,
            base_url: DEFAULT_BASE_URL.into(),
            observers,
        }
    }

    /// Override the API base URL (tests point this at a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: TokenUsage,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    #[instrument(skip(self, request), fields(model = %self.config.model))]
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, LlmError> {
        self.observers.emit(&PipelineEvent::ModelStart {
            prompts: request.rendered_prompts(),
        });

        let body = serde_json::json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "messages": request.messages,
        });

        let resp = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::from_status(status, body));
        }

        let parsed: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::MalformedResponse("response contained no choices".into()))?;

        debug!(
            prompt_tokens = parsed.usage.prompt_tokens,
            completion_tokens = parsed.usage.completion_tokens,
            "completion received"
        );

        self.observers.emit(&PipelineEvent::ModelEnd {
            preview: text::preview(&text),
        });

        Ok(Completion {
            text,
            usage: parsed.usage,
        })
    }
}
