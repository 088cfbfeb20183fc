//! Runtime error hierarchy.

use newscheck_core::errors::LlmError;

/// Errors fatal to one stage's execution.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// The bound model client failed; fatal to the stage, no retry.
    #[error("model call failed: {0}")]
    Llm(#[from] LlmError),

    /// The reasoning loop never produced a final answer.
    #[error("stage exceeded {0} turns without finishing")]
    MaxTurnsExceeded(u32),
}

/// Errors terminating the whole pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The pipeline was constructed with no tasks.
    #[error("pipeline has no tasks")]
    Empty,

    /// `kickoff` was called again after a run already started.
    #[error("pipeline already ran")]
    AlreadyRan,

    /// A task failed; carries the originating task index for reporting.
    #[error("task {index} ({role}) failed: {source}")]
    TaskFailed {
        index: usize,
        role: String,
        #[source]
        source: StageError,
    },
}
