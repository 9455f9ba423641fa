//! LLM integration for the proxy service.
//!
//! A single backend is supported: any OpenAI-compatible chat-completions
//! endpoint, reached over plain `reqwest`. The `LlmProvider` trait is the
//! seam the HTTP layer and tests depend on.

pub mod openai;
pub mod therapist;

pub use openai::OpenAiProvider;
pub use therapist::TherapistProxy;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ProxyConfig;
use crate::error::LlmError;

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One message of a chat-completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Provider-agnostic completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
}

/// Text of the first completion choice.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
}

/// Anything that can turn a message list into a completion.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn model_name(&self) -> &str;

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

/// Create the OpenAI-compatible provider from proxy configuration.
pub fn create_provider(config: &ProxyConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    let provider = OpenAiProvider::new(
        config.api_key.clone(),
        &config.base_url,
        &config.model,
    )?;
    tracing::info!("Using OpenAI-compatible API (model: {})", config.model);
    Ok(Arc::new(provider))
}
