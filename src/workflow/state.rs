use crate::llm::ChatMessage;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-request input handed to a [`super::Workflow`]. Built fresh for every
/// call and never retained by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupervisorState {
    pub messages: Vec<ChatMessage>,
    pub questionnaire_answers: Map<String, Value>,
    pub image_path: Option<String>,
    pub agent_call_count: u32,
}

impl SupervisorState {
    pub fn new(
        user_text: impl Into<String>,
        questionnaire_answers: Option<Map<String, Value>>,
        image_path: Option<String>,
    ) -> Self {
        Self {
            messages: vec![ChatMessage::user(user_text)],
            questionnaire_answers: questionnaire_answers.unwrap_or_default(),
            image_path,
            agent_call_count: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_state_defaults() {
        let state = SupervisorState::new("analyze my hair", None, None);

        assert_eq!(state.messages, vec![ChatMessage::user("analyze my hair")]);
        assert!(state.questionnaire_answers.is_empty());
        assert_eq!(state.image_path, None);
        assert_eq!(state.agent_call_count, 1);
    }

    #[test]
    fn test_state_serializes_for_transport() {
        let answers = json!({"hair_type": "curly"}).as_object().cloned();
        let state = SupervisorState::new("hi", answers, Some("/tmp/hair.jpg".to_string()));

        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({
                "messages": [{"role": "user", "content": "hi"}],
                "questionnaire_answers": {"hair_type": "curly"},
                "image_path": "/tmp/hair.jpg",
                "agent_call_count": 1
            })
        );
    }
}
