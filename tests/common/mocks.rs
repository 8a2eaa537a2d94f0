use async_trait::async_trait;
use hair_analysis_api::{
    Error, Result,
    workflow::{SupervisorState, Workflow, WorkflowOutput},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Behavior {
    Output(WorkflowOutput),
    Fail(String),
    Panic(String),
}

/// Mock workflow for testing
#[derive(Debug, Clone)]
pub struct MockWorkflow {
    behavior: Behavior,
    pub states: Arc<Mutex<Vec<SupervisorState>>>,
}

impl MockWorkflow {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            states: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns `output` verbatim; it must be a JSON object.
    pub fn returning(output: Value) -> Self {
        let output = output
            .as_object()
            .cloned()
            .expect("mock workflow output must be a JSON object");
        Self::with_behavior(Behavior::Output(output))
    }

    pub fn answering(answer: &str) -> Self {
        Self::returning(serde_json::json!({ "final_answer": answer }))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_behavior(Behavior::Fail(message.to_string()))
    }

    pub fn panicking(message: &str) -> Self {
        Self::with_behavior(Behavior::Panic(message.to_string()))
    }

    pub fn recorded_states(&self) -> Vec<SupervisorState> {
        self.states.lock().unwrap().clone()
    }
}

#[async_trait]
impl Workflow for MockWorkflow {
    fn name(&self) -> &str {
        "mock"
    }

    async fn invoke(&self, state: SupervisorState) -> Result<WorkflowOutput> {
        self.states.lock().unwrap().push(state);

        match &self.behavior {
            Behavior::Output(output) => Ok(output.clone()),
            Behavior::Fail(message) => Err(Error::workflow(message.clone())),
            Behavior::Panic(message) => panic!("{}", message),
        }
    }
}
