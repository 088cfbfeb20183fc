//! Sequential pipeline orchestrator.
//!
//! Tasks run strictly in construction order. Each completed task's output
//! is appended to a shared context that later tasks receive in full; the
//! pipeline's result is the final task's output alone.

use tracing::{info, instrument};

use crate::errors::PipelineError;
use crate::task::Task;

/// Lifecycle of one task within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Running,
    Completed,
    Failed,
}

/// An ordered set of tasks executed one at a time.
///
/// A pipeline is single-use: a second `kickoff` is rejected, and the
/// per-task states and context remain inspectable after the run.
pub struct Pipeline {
    tasks: Vec<Task>,
    states: Vec<TaskState>,
    context: Vec<String>,
}

impl Pipeline {
    /// Build a pipeline over `tasks`, all initially pending.
    pub fn new(tasks: Vec<Task>) -> Self {
        let states = vec![TaskState::Pending; tasks.len()];
        Self {
            tasks,
            states,
            context: Vec::new(),
        }
    }

    /// Run every task in order and return the final task's output.
    ///
    /// The first failure halts the run; tasks after it stay pending. The
    /// error names the failed task's index and stage role.
    #[instrument(skip(self), fields(tasks = self.tasks.len()))]
    pub async fn kickoff(&mut self) -> Result<String, PipelineError> {
        if self.tasks.is_empty() {
            return Err(PipelineError::Empty);
        }
        if self.states.iter().any(|s| *s != TaskState::Pending) {
            return Err(PipelineError::AlreadyRan);
        }

        let mut output = String::new();
        for index in 0..self.tasks.len() {
            let task = self.tasks[index].clone();
            let role = task.agent().role().to_string();
            info!(index, %role, "task starting");
            self.states[index] = TaskState::Running;

            match task
                .agent()
                .execute(task.description(), task.expected_output(), &self.context)
                .await
            {
                Ok(result) => {
                    self.states[index] = TaskState::Completed;
                    self.context.push(result.clone());
                    output = result;
                    info!(index, %role, "task completed");
                }
                Err(source) => {
                    self.states[index] = TaskState::Failed;
                    return Err(PipelineError::TaskFailed {
                        index,
                        role,
                        source,
                    });
                }
            }
        }

        Ok(output)
    }

    /// Per-task states, in task order.
    pub fn states(&self) -> &[TaskState] {
        &self.states
    }

    /// Outputs of completed tasks, in completion order.
    pub fn context(&self) -> &[String] {
        &self.context
    }
}
