//! # newscheck-runtime
//!
//! The pipeline core: [`agent::Agent`] (a stage's reasoning loop),
//! [`task::Task`] (one unit of work bound to a stage), and
//! [`pipeline::Pipeline`] (the sequential orchestrator threading context
//! between tasks).
//!
//! Execution is strictly sequential: one task at a time, one model or tool
//! call at a time. Failures propagate; the only swallowed condition is the
//! search tool's explicit zero-results sentinel, which is ordinary output.

#![deny(unsafe_code)]

pub mod agent;
pub mod errors;
pub mod pipeline;
pub mod task;

pub use agent::{Agent, AgentConfig};
pub use errors::{PipelineError, StageError};
pub use pipeline::{Pipeline, TaskState};
pub use task::Task;
