//! One unit of pipeline work, bound to exactly one stage.

use std::sync::Arc;

use crate::agent::Agent;

/// A task: a description, an expected-output contract, and the stage that
/// will execute it. Immutable once constructed; the binding never changes.
///
/// The expected-output contract is free-text prompt guidance. It is passed
/// into the stage's prompt verbatim and never machine-checked.
#[derive(Clone)]
pub struct Task {
    description: String,
    expected_output: String,
    agent: Arc<Agent>,
}

impl Task {
    /// Bind a task to a stage.
    pub fn new(
        description: impl Into<String>,
        expected_output: impl Into<String>,
        agent: Arc<Agent>,
    ) -> Self {
        Self {
            description: description.into(),
            expected_output: expected_output.into(),
            agent,
        }
    }

    /// The task description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The opaque expected-output guidance.
    pub fn expected_output(&self) -> &str {
        &self.expected_output
    }

    /// The bound stage.
    pub fn agent(&self) -> &Arc<Agent> {
        &self.agent
    }
}
