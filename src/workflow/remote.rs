use super::{SupervisorState, Workflow, WorkflowOutput};
use crate::{Error, Result, config::RemoteWorkflowConfig};
use async_trait::async_trait;
use reqwest::{
    Client, Url,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use serde_json::Value;
use tracing::debug;

/// Delegates to a workflow served over HTTP: the state is POSTed as JSON and
/// the response body is the result mapping.
pub struct RemoteWorkflow {
    client: Client,
    url: Url,
}

impl RemoteWorkflow {
    pub fn new(config: &RemoteWorkflowConfig) -> Result<Self> {
        let url = Url::parse(&config.url).map_err(|e| {
            Error::config(format!("Invalid workflow url '{}': {}", config.url, e))
        })?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::config(format!("Invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::config(format!("Invalid value for header '{}': {}", name, e)))?;
            headers.insert(name, value);
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl Workflow for RemoteWorkflow {
    fn name(&self) -> &str {
        "remote"
    }

    async fn invoke(&self, state: SupervisorState) -> Result<WorkflowOutput> {
        debug!("Posting workflow state to {}", self.url);

        let response = self
            .client
            .post(self.url.clone())
            .json(&state)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::workflow(format!(
                "workflow endpoint returned {}",
                status
            )));
        }

        match response.json::<Value>().await? {
            Value::Object(output) => Ok(output),
            other => Err(Error::workflow(format!(
                "workflow endpoint returned a non-object result: {}",
                other
            ))),
        }
    }
}
