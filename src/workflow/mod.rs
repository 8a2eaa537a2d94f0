//! The reasoning backend behind `/analyze`.
//!
//! The server only knows the [`Workflow`] trait: hand it a
//! [`SupervisorState`], get back a result mapping. Which implementation is
//! bound (if any) is decided once at startup by [`resolve`].

mod llm;
mod remote;
mod state;

pub use llm::LlmWorkflow;
pub use remote::RemoteWorkflow;
pub use state::SupervisorState;

use crate::{Error, Result, config::WorkflowConfig};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, warn};

/// Result mapping produced by a workflow run.
pub type WorkflowOutput = Map<String, Value>;

pub const FINAL_ANSWER_KEY: &str = "final_answer";
pub const NO_RESPONSE: &str = "No response generated";

#[async_trait]
pub trait Workflow: Send + Sync {
    fn name(&self) -> &str;

    async fn invoke(&self, state: SupervisorState) -> Result<WorkflowOutput>;
}

/// Reads `final_answer` from a workflow result.
pub fn final_answer(output: &WorkflowOutput) -> Result<String> {
    match output.get(FINAL_ANSWER_KEY) {
        None => Ok(NO_RESPONSE.to_string()),
        Some(Value::String(answer)) => Ok(answer.clone()),
        Some(other) => Err(Error::workflow(format!(
            "final_answer must be a string, got {}",
            other
        ))),
    }
}

/// Binds the configured workflow. Never fails: any problem is logged and the
/// service falls back to degraded mode.
pub fn resolve(config: Option<&WorkflowConfig>) -> Option<Arc<dyn Workflow>> {
    let Some(config) = config else {
        warn!("❌ No workflow configured, /analyze will serve placeholder answers");
        return None;
    };

    match build(config) {
        Ok(workflow) => {
            info!("✅ Workflow '{}' resolved successfully", workflow.name());
            Some(workflow)
        }
        Err(e) => {
            warn!("❌ Workflow unavailable, /analyze will serve placeholder answers: {}", e);
            None
        }
    }
}

fn build(config: &WorkflowConfig) -> Result<Arc<dyn Workflow>> {
    let workflow: Arc<dyn Workflow> = match config {
        WorkflowConfig::Llm(llm_config) => Arc::new(LlmWorkflow::from_config(llm_config)?),
        WorkflowConfig::Remote(remote_config) => Arc::new(RemoteWorkflow::new(remote_config)?),
    };
    Ok(workflow)
}
