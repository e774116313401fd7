//! Advice service. Turns a profile into three pieces of shopping advice.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use super::client::AdviceSource;
use super::prompt::build_prompt;
use super::RawAdviceRequest;
use crate::config::{ApiKey, AppConfig};
use crate::error::AdviceError;
use crate::llm::{self, CompletionRequest, LlmProvider};
use crate::profile::{self, CustomerProfile, ValidationOptions};

/// Owns the generative backend, or the fact that there is none.
pub struct AdviceService {
    llm: Option<Arc<dyn LlmProvider>>,
    validation: ValidationOptions,
}

impl AdviceService {
    /// Service backed by an explicit provider.
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            llm: Some(llm),
            validation: ValidationOptions::default(),
        }
    }

    /// Service with no credential. Every call fails with [`AdviceError::Configuration`].
    pub fn unconfigured() -> Self {
        Self {
            llm: None,
            validation: ValidationOptions::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let service = match &config.ai.api_key {
            ApiKey::Present(key) => Self::new(llm::create_provider(&config.ai, key.clone())),
            ApiKey::Absent => {
                tracing::warn!("GEMINI_API_KEY is not set; advice requests will be refused");
                Self::unconfigured()
            }
        };
        service.with_validation(ValidationOptions {
            strict_frequency: config.strict_frequency,
        })
    }

    pub fn with_validation(mut self, validation: ValidationOptions) -> Self {
        self.validation = validation;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.llm.is_some()
    }

    /// Run an incoming request through the boundary checks, then generate.
    ///
    /// Order: credential, profile presence, profile fields, generation.
    /// Nothing is sent to the model unless every check passes.
    pub async fn handle(&self, request: RawAdviceRequest) -> Result<String, AdviceError> {
        if !self.is_configured() {
            return Err(AdviceError::Configuration);
        }

        let raw = match request.profile {
            Some(raw) if !is_blank(&raw) => raw,
            _ => return Err(AdviceError::MissingProfile),
        };
        let profile = profile::validate_value(&raw, self.validation)?;

        let question = question_text(request.question.as_ref());
        self.generate_advice(&profile, question.as_deref()).await
    }

    /// Generate advice for an already-validated profile.
    ///
    /// Exactly one call to the model; no retries, no caching.
    pub async fn generate_advice(
        &self,
        profile: &CustomerProfile,
        question: Option<&str>,
    ) -> Result<String, AdviceError> {
        let llm = self.llm.as_ref().ok_or(AdviceError::Configuration)?;

        let prompt = build_prompt(profile, question);
        debug!(model = llm.model_name(), "Requesting advice");

        let response = llm.complete(CompletionRequest::new(prompt)).await?;

        let advice = response
            .text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or(AdviceError::EmptyResponse)?;

        info!(chars = advice.chars().count(), "Advice generated");
        Ok(advice.to_string())
    }
}

/// `null`, `false`, `0` and `""` all count as "no profile sent".
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Strings pass through, `null` means no question, anything else is embedded
/// as its JSON text.
fn question_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl AdviceSource for AdviceService {
    async fn request_advice(
        &self,
        profile: &CustomerProfile,
        question: Option<&str>,
    ) -> Result<String, String> {
        if !self.is_configured() {
            return Err(AdviceError::Configuration.to_string());
        }
        profile::validate(profile, self.validation).map_err(|e| AdviceError::from(e).to_string())?;
        self.generate_advice(profile, question)
            .await
            .map_err(|e| e.to_string())
    }
}
