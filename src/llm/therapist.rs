//! Single-turn therapist proxy — wraps an LLM provider with a fixed system
//! prompt.

use std::sync::Arc;

use crate::config::DEFAULT_SYSTEM_PROMPT;
use crate::error::LlmError;
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};

/// Forwards one user message, prefixed by the system prompt, and returns
/// the first completion's text. Holds no conversation history.
pub struct TherapistProxy {
    llm: Arc<dyn LlmProvider>,
    system_prompt: String,
}

impl TherapistProxy {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            llm,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Build the two-message request for `message`.
    pub fn build_request(&self, message: &str) -> CompletionRequest {
        CompletionRequest {
            messages: vec![
                ChatMessage::system(&self.system_prompt),
                ChatMessage::user(message),
            ],
        }
    }

    /// Ask the provider for a reply to `message`.
    pub async fn reply(&self, message: &str) -> Result<String, LlmError> {
        let response = self.llm.complete(self.build_request(message)).await?;
        tracing::debug!(model = self.llm.model_name(), "Proxy reply received");
        Ok(response.content)
    }
}
