//! Error types for Segment Advisor.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Message returned when the generative credential is not configured.
pub const MSG_API_KEY_MISSING: &str = "AI API 키가 설정되지 않았습니다.";
/// Message returned when the request carries no profile.
pub const MSG_PROFILE_MISSING: &str = "고객 정보(profile)가 필요합니다.";
/// Message returned for any profile that fails validation.
pub const MSG_PROFILE_INVALID: &str = "고객 정보가 올바르지 않습니다.";
/// Message returned when the collaborator replied without usable text.
pub const MSG_EMPTY_RESPONSE: &str = "AI 응답에서 유효한 텍스트를 추출할 수 없습니다.";
/// Fallback when a collaborator failure carries no message of its own.
pub const MSG_ADVICE_FAILED: &str = "AI 조언 생성 중 서버에서 오류가 발생했습니다.";

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// A profile field that failed validation.
///
/// Variants are ordered the way the validator checks them; the first failure wins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("age must be a finite number")]
    AgeNotNumber,

    #[error("age {0} is outside 0..=120")]
    AgeOutOfRange(f64),

    #[error("age {0} is not a whole number")]
    AgeNotInteger(f64),

    #[error("purchase amount must be a finite number")]
    AmountNotNumber,

    #[error("purchase amount {0} is negative")]
    AmountNegative(f64),

    #[error("purchase frequency must be a string")]
    FrequencyNotString,

    #[error("unknown purchase frequency: {0}")]
    FrequencyUnknown(String),

    #[error("profile must be a JSON object")]
    NotAnObject,
}

/// Errors produced along the advice flow, each mapping to one HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum AdviceError {
    #[error("{}", MSG_API_KEY_MISSING)]
    Configuration,

    #[error("{}", MSG_PROFILE_MISSING)]
    MissingProfile,

    #[error("{}", MSG_PROFILE_INVALID)]
    Validation(#[source] ValidationError),

    #[error("{}", MSG_EMPTY_RESPONSE)]
    EmptyResponse,

    #[error("{message}")]
    Collaborator { message: String },

    #[error("{0}")]
    MalformedBody(String),
}

impl AdviceError {
    /// Wrap a collaborator failure, falling back to the generic message when it has none.
    pub fn collaborator(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Collaborator {
                message: MSG_ADVICE_FAILED.to_string(),
            }
        } else {
            Self::Collaborator { message }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ValidationError> for AdviceError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<LlmError> for AdviceError {
    fn from(err: LlmError) -> Self {
        Self::collaborator(err.detail())
    }
}

impl IntoResponse for AdviceError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Failures talking to the classification collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Collaborator at {url} returned status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// Illegal dialog state transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    #[error("A request is already in flight")]
    AlreadySubmitting,

    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

/// LLM provider errors.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Provider {provider} returned status {status}: {body}")]
    ApiError {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

impl LlmError {
    /// The provider's own message, without the provider/status prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::RequestFailed { reason, .. } | Self::InvalidResponse { reason, .. } => reason,
            Self::ApiError { body, .. } => body,
        }
    }
}
