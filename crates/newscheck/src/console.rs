//! Console observer: renders pipeline lifecycle events through `tracing`.

use tracing::{debug, info};

use newscheck_core::events::{Observer, StageAction};

/// Logs every pipeline event. Full prompts go to `debug`; everything else
/// is a bounded `info` line.
pub struct ConsoleObserver;

impl Observer for ConsoleObserver {
    fn on_model_start(&self, prompts: &[String]) {
        info!(prompts = prompts.len(), "calling model");
        for (i, prompt) in prompts.iter().enumerate() {
            debug!(prompt = i + 1, "{prompt}");
        }
    }

    fn on_model_end(&self, preview: &str) {
        info!(%preview, "model responded");
    }

    fn on_tool_start(&self, tool: &str, input: &str) {
        info!(%tool, %input, "tool starting");
    }

    fn on_tool_end(&self, tool: &str, preview: &str) {
        info!(%tool, %preview, "tool finished");
    }

    fn on_stage_action(&self, action: &StageAction) {
        info!(tool = %action.tool, input = %action.input, log = %action.log, "stage action");
    }

    fn on_stage_finish(&self, role: &str, output: &str) {
        info!(%role, %output, "stage finished");
    }
}
