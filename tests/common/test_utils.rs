use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use hair_analysis_api::{
    server::{self, AppState},
    workflow::Workflow,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

/// Router with no workflow bound (degraded mode)
pub fn create_degraded_app() -> Router {
    server::router(AppState::default())
}

/// Router bound to the given workflow
pub fn create_test_app(workflow: impl Workflow + 'static) -> Router {
    let workflow: Arc<dyn Workflow> = Arc::new(workflow);
    server::router(AppState::new(Some(workflow)))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and decode the JSON response body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a config YAML file into `dir` and return its path
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let config_path = dir.path().join("config.yaml");
    tokio::fs::write(&config_path, content).await.unwrap();
    config_path
}

/// Sample configuration with an LLM-backed workflow
pub const SAMPLE_LLM_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

workflow:
  type: "llm"
  base_url: "https://api.openai.com/v1"
  api_key: "test-api-key"
  model: "gpt-4o-mini"
  system_prompt: "You are a hair-care expert."
  temperature: 0.3
"#;

/// Sample configuration with a remote workflow
pub const SAMPLE_REMOTE_CONFIG_YAML: &str = r#"
workflow:
  type: "remote"
  url: "http://supervisor:9000/invoke"
  headers:
    authorization: "Bearer secret"
"#;
