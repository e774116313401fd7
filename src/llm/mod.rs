//! LLM integration for Segment Advisor.
//!
//! The advice flow talks to a generative model through the [`LlmProvider`]
//! trait. The production backend is Google's Gemini `generateContent` API,
//! called directly over reqwest; tests plug in stub providers.

pub mod gemini;

pub use gemini::GeminiProvider;

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::config::AiConfig;
use crate::error::LlmError;

/// A single-turn completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// What the model sent back.
///
/// `text` is `None` when the reply carried no text part at all; whether blank
/// text is acceptable is the caller's decision.
#[derive(Debug, Clone, Default)]
pub struct CompletionResponse {
    pub text: Option<String>,
}

/// A generative backend.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn model_name(&self) -> &str;

    /// Send exactly one request. Implementations must not retry.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

/// Create the Gemini provider for a configured key.
pub fn create_provider(config: &AiConfig, api_key: SecretString) -> Arc<dyn LlmProvider> {
    tracing::info!("Using Gemini (model: {})", config.model);
    Arc::new(GeminiProvider::new(
        api_key,
        config.model.clone(),
        config.base_url.clone(),
    ))
}
