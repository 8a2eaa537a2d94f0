use super::types::{
    AnalysisOutcome, HairRequest, HairResponse, HealthResponse, RootResponse,
};
use crate::{
    Result,
    workflow::{self, SupervisorState, Workflow},
};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

/// Application context shared by all handlers. Built once at startup and
/// never mutated afterwards.
#[derive(Clone, Default)]
pub struct AppState {
    pub workflow: Option<Arc<dyn Workflow>>,
}

impl AppState {
    pub fn new(workflow: Option<Arc<dyn Workflow>>) -> Self {
        Self { workflow }
    }
}

pub async fn read_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hair Analysis API is running!",
        status: "healthy",
    })
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "hair-analysis-api",
    })
}

/// Always answers 200; failures are reported through `success` and `error`.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<HairRequest>,
) -> Json<HairResponse> {
    let request_id = Uuid::new_v4();
    let span = info_span!("analyze", %request_id);

    let outcome = async {
        info!("Received analysis request");

        let Some(workflow) = state.workflow else {
            info!("No workflow bound, returning placeholder answer");
            return AnalysisOutcome::Degraded;
        };

        match run_workflow(workflow, request).await {
            Ok(answer) => {
                info!("Analysis completed via workflow");
                AnalysisOutcome::Answered(answer)
            }
            Err(e) => {
                error!("Analysis failed: {}", e);
                AnalysisOutcome::Failed(e.to_string())
            }
        }
    }
    .instrument(span)
    .await;

    Json(outcome.into())
}

async fn run_workflow(workflow: Arc<dyn Workflow>, request: HairRequest) -> Result<String> {
    let supervisor_state =
        SupervisorState::new(request.user_text, request.questionnaire, request.image_path);

    // Own task so a panicking workflow surfaces as a JoinError.
    let output = tokio::spawn(async move { workflow.invoke(supervisor_state).await }).await??;

    workflow::final_answer(&output)
}
