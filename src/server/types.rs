use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_USER_TEXT: &str = "analyze my hair and recommend products";
pub const DEGRADED_ANSWER: &str = "✅ API is working! Agent setup in progress...";

#[derive(Debug, Clone, Deserialize)]
pub struct HairRequest {
    #[serde(default)]
    pub questionnaire: Option<Map<String, Value>>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default = "default_user_text")]
    pub user_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HairResponse {
    pub final_answer: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Terminal state of one `/analyze` request.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// No workflow is bound.
    Degraded,
    Answered(String),
    /// Carries the failure's display form.
    Failed(String),
}

impl From<AnalysisOutcome> for HairResponse {
    fn from(outcome: AnalysisOutcome) -> Self {
        match outcome {
            AnalysisOutcome::Degraded => Self {
                final_answer: DEGRADED_ANSWER.to_string(),
                success: true,
                error: None,
            },
            AnalysisOutcome::Answered(final_answer) => Self {
                final_answer,
                success: true,
                error: None,
            },
            AnalysisOutcome::Failed(error) => Self {
                final_answer: format!("Error: {}", error),
                success: false,
                error: Some(error),
            },
        }
    }
}

fn default_user_text() -> String {
    DEFAULT_USER_TEXT.to_string()
}
