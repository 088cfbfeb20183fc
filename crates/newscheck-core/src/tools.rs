//! Tool capability trait.
//!
//! A tool is a named external capability a stage may invoke mid-reasoning.
//! The description is part of the model's decision context, not validated.

use async_trait::async_trait;

/// Errors from tool invocation.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

/// Trait implemented by each tool.
///
/// Calls are always issued synchronously, one at a time, from within a
/// single stage's turn, so implementations need no concurrency control of
/// their own. Instances are shareable across stages via `Arc`.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Stable tool name the model selects by.
    fn name(&self) -> &str;

    /// Natural-language description rendered into the stage prompt.
    fn description(&self) -> &str;

    /// Invoke the tool with a free-text input and return its output.
    async fn invoke(&self, input: &str) -> Result<String, ToolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    #[async_trait]
    impl Tool for Upper {
        fn name(&self) -> &str {
            "Upper"
        }
        fn description(&self) -> &str {
            "Uppercases the input"
        }
        async fn invoke(&self, input: &str) -> Result<String, ToolError> {
            Ok(input.to_uppercase())
        }
    }

    #[tokio::test]
    async fn invoke_through_trait_object() {
        let tool: std::sync::Arc<dyn Tool> = std::sync::Arc::new(Upper);
        assert_eq!(tool.invoke("hi").await.unwrap(), "HI");
    }

    #[test]
    fn tool_error_display() {
        let err = ToolError::InvalidInput("empty query".into());
        assert_eq!(err.to_string(), "invalid input: empty query");
    }
}
