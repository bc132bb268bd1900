//! Provider trait — the abstraction over the completion backend.
//!
//! A Provider knows how to send a list of chat messages to an LLM and get the
//! generated text back. The pipeline calls `complete()` without knowing which
//! backend is being used, which is also what makes the pipeline testable with
//! stub providers.

use crate::error::ProviderError;
use crate::message::Message;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Configuration for a single completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRequest {
    /// The model to use (e.g., "anthropic/claude-3.5-sonnet", "openai/gpt-4o-mini")
    pub model: String,

    /// The messages to send (at most one system plus one user message here)
    pub messages: Vec<Message>,

    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ProviderRequest {
    /// A single-user-message request, the common case for summarisation.
    pub fn user(model: impl Into<String>, content: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::user(content)],
            max_tokens: Some(max_tokens),
        }
    }
}

/// A complete response from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// The generated text. Empty when the provider returned no content.
    pub content: String,

    /// Which model actually responded (may differ from requested)
    pub model: String,

    /// Token usage statistics
    pub usage: Option<Usage>,
}

/// Token usage information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The core Provider trait.
///
/// The production implementation is the OpenAI-compatible client in
/// `blogforge-providers`; tests implement it with canned responses.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "openrouter").
    fn name(&self) -> &str;

    /// Send a request and get a complete response.
    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError>;

    /// List available models for this provider.
    async fn list_models(&self) -> std::result::Result<Vec<String>, ProviderError> {
        Ok(Vec::new())
    }

    /// Health check — can we reach the provider?
    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        Ok(true)
    }
}
