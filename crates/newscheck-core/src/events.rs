//! Pipeline lifecycle events and the observer interface.
//!
//! Observability is decoupled from control flow: the model client and the
//! stage executor hold a list of registered observers and invoke them
//! synchronously on the pipeline thread. Observers must tolerate repeated
//! same-thread invocation; any I/O they perform becomes part of the
//! critical path.

use std::sync::Arc;

/// A stage's decision to act, as parsed from the model's output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageAction {
    /// Name of the tool the model selected.
    pub tool: String,
    /// Free-text input the model supplied for the tool.
    pub input: String,
    /// The model's free-text rationale, if it gave one.
    pub log: String,
}

/// Lifecycle event produced by the model client or stage execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipelineEvent {
    /// A model call is about to be issued; carries the full outgoing
    /// prompt set.
    ModelStart { prompts: Vec<String> },
    /// A model call returned; carries a bounded preview of the text.
    ModelEnd { preview: String },
    /// A tool invocation is starting.
    ToolStart { tool: String, input: String },
    /// A tool invocation finished; carries a bounded output preview.
    ToolEnd { tool: String, preview: String },
    /// A stage decided to act.
    StageAction(StageAction),
    /// A stage terminated with its final output.
    StageFinish { role: String, output: String },
}

impl PipelineEvent {
    /// Short kind string for logging and test assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ModelStart { .. } => "model_start",
            Self::ModelEnd { .. } => "model_end",
            Self::ToolStart { .. } => "tool_start",
            Self::ToolEnd { .. } => "tool_end",
            Self::StageAction(_) => "stage_action",
            Self::StageFinish { .. } => "stage_finish",
        }
    }
}

/// Observer interface: one method per event kind, all defaulting to no-ops.
///
/// Implementations must not assume anything about call ordering beyond what
/// the pipeline guarantees (start before end, per call).
pub trait Observer: Send + Sync {
    /// A model call is about to be issued.
    fn on_model_start(&self, _prompts: &[String]) {}
    /// A model call returned.
    fn on_model_end(&self, _preview: &str) {}
    /// A tool invocation is starting.
    fn on_tool_start(&self, _tool: &str, _input: &str) {}
    /// A tool invocation finished.
    fn on_tool_end(&self, _tool: &str, _preview: &str) {}
    /// A stage decided to act.
    fn on_stage_action(&self, _action: &StageAction) {}
    /// A stage terminated.
    fn on_stage_finish(&self, _role: &str, _output: &str) {}
}

/// A cheaply clonable list of registered observers.
#[derive(Clone, Default)]
pub struct ObserverSet {
    observers: Vec<Arc<dyn Observer>>,
}

impl ObserverSet {
    /// An empty set (events are dropped).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn register(&mut self, observer: Arc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Dispatch an event to every observer, synchronously, in
    /// registration order.
    pub fn emit(&self, event: &PipelineEvent) {
        for observer in &self.observers {
            match event {
                PipelineEvent::ModelStart { prompts } => observer.on_model_start(prompts),
                PipelineEvent::ModelEnd { preview } => observer.on_model_end(preview),
                PipelineEvent::ToolStart { tool, input } => observer.on_tool_start(tool, input),
                PipelineEvent::ToolEnd { tool, preview } => observer.on_tool_end(tool, preview),
                PipelineEvent::StageAction(action) => observer.on_stage_action(action),
                PipelineEvent::StageFinish { role, output } => {
                    observer.on_stage_finish(role, output);
                }
            }
        }
    }
}
