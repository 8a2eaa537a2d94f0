use super::{FINAL_ANSWER_KEY, SupervisorState, Workflow, WorkflowOutput};
use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenAiClient},
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

const DEFAULT_SYSTEM_PROMPT: &str = "You are a professional hair-care advisor. \
Assess the user's hair from their questionnaire answers and any photo they mention, \
then recommend a concise routine and suitable product types.";

/// Answers with a single chat completion over an OpenAI-compatible API.
pub struct LlmWorkflow {
    client: Arc<dyn LlmClient>,
    system_prompt: String,
    temperature: Option<f32>,
}

impl LlmWorkflow {
    pub fn new(
        client: Arc<dyn LlmClient>,
        system_prompt: Option<String>,
        temperature: Option<f32>,
    ) -> Self {
        Self {
            client,
            system_prompt: system_prompt.unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            temperature,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        if !config.provider.eq_ignore_ascii_case("openai") {
            return Err(Error::config(format!(
                "Unsupported LLM provider: {}",
                config.provider
            )));
        }

        let api_key = if config.api_key.is_empty() {
            std::env::var("OPENAI_API_KEY").unwrap_or_default()
        } else {
            config.api_key.clone()
        };
        if api_key.is_empty() {
            return Err(Error::config(
                "LLM workflow requires an api_key or OPENAI_API_KEY",
            ));
        }

        let client = OpenAiClient::new(config, &api_key);
        info!("LLM workflow using model {}", client.model());

        Ok(Self::new(
            Arc::new(client),
            config.system_prompt.clone(),
            config.temperature,
        ))
    }

    fn build_messages(&self, state: &SupervisorState) -> Result<Vec<ChatMessage>> {
        let mut messages = Vec::with_capacity(state.messages.len() + 2);
        messages.push(ChatMessage::system(self.system_prompt.clone()));
        messages.extend(state.messages.iter().cloned());

        let mut context = Vec::new();
        if !state.questionnaire_answers.is_empty() {
            context.push(format!(
                "Questionnaire answers:\n{}",
                serde_json::to_string_pretty(&state.questionnaire_answers)?
            ));
        }
        if let Some(ref image_path) = state.image_path {
            context.push(format!("Hair photo: {}", image_path));
        }
        if !context.is_empty() {
            messages.push(ChatMessage::user(context.join("\n\n")));
        }

        Ok(messages)
    }
}

#[async_trait]
impl Workflow for LlmWorkflow {
    fn name(&self) -> &str {
        "llm"
    }

    async fn invoke(&self, state: SupervisorState) -> Result<WorkflowOutput> {
        debug!(
            "LLM workflow invoked (call #{}) with {} questionnaire answers",
            state.agent_call_count,
            state.questionnaire_answers.len()
        );

        let request = ChatCompletionRequest {
            messages: self.build_messages(&state)?,
            temperature: self.temperature,
        };
        let response = self.client.create_chat_completion(request).await?;

        let mut output = WorkflowOutput::new();
        if let Some(content) = response.first_content() {
            output.insert(
                FINAL_ANSWER_KEY.to_string(),
                Value::String(content.to_string()),
            );
        }
        Ok(output)
    }
}
