//! Stage (agent) abstraction and its reasoning loop.
//!
//! A stage is a named role bound to a model client and an optional tool
//! set. Per turn, the model decides whether to invoke a tool or finish;
//! that decision is parsed from its output, not branched at compile time.

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use newscheck_core::events::{ObserverSet, PipelineEvent, StageAction};
use newscheck_core::provider::{ChatMessage, ChatProvider, CompletionRequest};
use newscheck_core::text;
use newscheck_tools::ToolRegistry;

use crate::errors::StageError;

const DEFAULT_MAX_TURNS: u32 = 6;

/// Role, goal, and persona of a stage. Rendered into every prompt.
#[derive(Clone, Debug)]
pub struct AgentConfig {
    pub role: String,
    pub goal: String,
    pub backstory: String,
}

impl AgentConfig {
    /// Build a config.
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
        }
    }
}

/// A configured stage. Immutable after construction; shared read-only by
/// the pipeline across the run.
pub struct Agent {
    config: AgentConfig,
    client: Arc<dyn ChatProvider>,
    tools: ToolRegistry,
    observers: ObserverSet,
    /// Fixed configuration invariant: a stage never hands its task to
    /// another stage.
    allow_delegation: bool,
    max_turns: u32,
}

impl Agent {
    /// Create a stage with no tools.
    pub fn new(config: AgentConfig, client: Arc<dyn ChatProvider>, observers: ObserverSet) -> Self {
        Self {
            config,
            client,
            tools: ToolRegistry::new(),
            observers,
            allow_delegation: false,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Attach a tool set.
    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    /// Override the reasoning-loop turn cap.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// The stage's role name.
    pub fn role(&self) -> &str {
        &self.config.role
    }

    /// Always false in this system.
    pub fn allow_delegation(&self) -> bool {
        self.allow_delegation
    }

    fn system_prompt(&self) -> String {
        let mut prompt = format!(
            "You are {role}. {backstory}\nYour goal: {goal}\n",
            role = self.config.role,
            backstory = self.config.backstory,
            goal = self.config.goal,
        );

        if self.tools.count() > 0 {
            prompt.push_str("\nYou have access to the following tools:\n");
            for line in self.tools.catalog() {
                let _ = writeln!(prompt, "- {line}");
            }
            prompt.push_str(
                "\nTo use a tool, reply using exactly this format:\n\
                 Thought: why you are taking this action\n\
                 Action: the tool name\n\
                 Action Input: the input to pass to the tool\n",
            );
        }

        prompt.push_str(
            "\nWhen you have enough information, reply with:\n\
             Final Answer: your complete answer\n",
        );
        prompt
    }

    fn task_prompt(&self, description: &str, expected_output: &str, context: &[String]) -> String {
        let mut prompt = format!("{description}\n\nExpected output: {expected_output}\n");
        if !context.is_empty() {
            prompt.push_str("\nContext from previous work:\n\n");
            prompt.push_str(&context.join("\n\n"));
            prompt.push('\n');
        }
        prompt
    }

    /// Run the reasoning loop for one task.
    ///
    /// Model failures are fatal to the stage and propagate. Tool failures
    /// are caught at this boundary and fed back to the model as `[error]`
    /// observations.
    #[instrument(skip(self, description, expected_output, context), fields(role = %self.config.role))]
    pub async fn execute(
        &self,
        description: &str,
        expected_output: &str,
        context: &[String],
    ) -> Result<String, StageError> {
        let mut messages = vec![
            ChatMessage::system(self.system_prompt()),
            ChatMessage::user(self.task_prompt(description, expected_output, context)),
        ];

        for turn in 1..=self.max_turns {
            debug!(turn, "stage turn");
            let completion = self
                .client
                .complete(&CompletionRequest::new(messages.clone()))
                .await?;
            let reply = completion.text;

            // A tool-less stage never acts; its reply is always final.
            if self.tools.count() == 0 {
                let answer = final_answer_of(&reply).unwrap_or_else(|| reply.trim().to_string());
                return Ok(self.finish(answer));
            }

            match parse_directive(&reply) {
                Directive::Finish(answer) => return Ok(self.finish(answer)),
                Directive::Action(action) => {
                    self.observers.emit(&PipelineEvent::StageAction(action.clone()));
                    let observation = self.run_tool(&action).await;
                    messages.push(ChatMessage::assistant(reply));
                    messages.push(ChatMessage::user(format!("Observation: {observation}")));
                }
            }
        }

        Err(StageError::MaxTurnsExceeded(self.max_turns))
    }

    fn finish(&self, answer: String) -> String {
        self.observers.emit(&PipelineEvent::StageFinish {
            role: self.config.role.clone(),
            output: answer.clone(),
        });
        answer
    }

    /// Invoke the selected tool, turning every failure into an observation
    /// string rather than aborting the stage.
    async fn run_tool(&self, action: &StageAction) -> String {
        let Some(tool) = self.tools.get(&action.tool) else {
            warn!(tool = %action.tool, "model selected unknown tool");
            return format!(
                "[error] Unknown tool: {}. Available tools: {}",
                action.tool,
                self.tools.names().join(", ")
            );
        };

        self.observers.emit(&PipelineEvent::ToolStart {
            tool: action.tool.clone(),
            input: action.input.clone(),
        });

        let observation = match tool.invoke(&action.input).await {
            Ok(output) => output,
            Err(e) => {
                warn!(tool = %action.tool, error = %e, "tool failed");
                format!("[error] {e}")
            }
        };

        self.observers.emit(&PipelineEvent::ToolEnd {
            tool: action.tool.clone(),
            preview: text::preview(&observation),
        });

        observation
    }
}

/// A parsed model reply: either act, or finish.
#[derive(Debug, PartialEq, Eq)]
enum Directive {
    Action(StageAction),
    Finish(String),
}

/// Text after a `Final Answer:` marker, spanning to the end of the reply.
fn final_answer_of(reply: &str) -> Option<String> {
    reply
        .find("Final Answer:")
        .map(|pos| reply[pos + "Final Answer:".len()..].trim().to_string())
}

/// Parse a reply for a ReAct-style directive.
///
/// `Final Answer:` wins over an action when both appear. A reply with no
/// recognizable directive is treated as the final answer in full.
fn parse_directive(reply: &str) -> Directive {
    if let Some(answer) = final_answer_of(reply) {
        return Directive::Finish(answer);
    }

    let mut thought = Vec::new();
    let mut tool = None;
    let mut input = None;

    for line in reply.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("Thought:") {
            thought.push(rest.trim());
        } else if let Some(rest) = line.strip_prefix("Action:") {
            tool = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("Action Input:") {
            input = Some(rest.trim().to_string());
        }
    }

    match tool {
        Some(tool) => Directive::Action(StageAction {
            tool,
            input: input.unwrap_or_default(),
            log: thought.join(" "),
        }),
        None => Directive::Finish(reply.trim().to_string()),
    }
}
