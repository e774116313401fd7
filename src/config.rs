//! Configuration types.
//!
//! Everything is read from the environment once at startup and then passed
//! explicitly to the components that need it.

use std::net::SocketAddr;

use secrecy::SecretString;

use crate::error::ConfigError;

pub const DEFAULT_AI_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_API_HOST: &str = "http://localhost:8000";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Credential for the generative collaborator.
///
/// `Absent` is a real state, not an empty string: the advice service refuses
/// to run without contacting anything.
#[derive(Debug, Clone, Default)]
pub enum ApiKey {
    Present(SecretString),
    #[default]
    Absent,
}

impl ApiKey {
    /// Build from a raw value; unset or blank means absent.
    pub fn from_raw(raw: Option<String>) -> Self {
        match raw {
            Some(value) if !value.trim().is_empty() => Self::Present(SecretString::from(value)),
            _ => Self::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Settings for the generative-AI collaborator.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: ApiKey,
    pub model: String,
    /// API root, without trailing slash.
    pub base_url: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: ApiKey::Absent,
            model: DEFAULT_AI_MODEL.to_string(),
            base_url: DEFAULT_AI_BASE_URL.to_string(),
        }
    }
}

/// Settings for the classification collaborator.
#[derive(Debug, Clone)]
pub struct ClassificationConfig {
    /// Collaborator root, e.g. `http://localhost:8000`.
    pub api_host: String,
    pub analysis_path: String,
    pub batch_path: String,
    pub groups_path: String,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            analysis_path: "/api/analysis".to_string(),
            batch_path: "/api/analysis/batch".to_string(),
            groups_path: "/api/groups".to_string(),
        }
    }
}

/// Whole-application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub ai: AiConfig,
    pub classification: ClassificationConfig,
    /// Reject purchase frequencies outside the seven known options.
    pub strict_frequency: bool,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Used by `from_env` and by tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("SEGMENT_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                key: "SEGMENT_BIND_ADDR".to_string(),
                message: format!("{bind_raw:?}: {e}"),
            })?;

        let strict_frequency = match lookup("SEGMENT_STRICT_FREQUENCY") {
            Some(raw) => parse_bool("SEGMENT_STRICT_FREQUENCY", &raw)?,
            None => false,
        };

        let ai = AiConfig {
            api_key: ApiKey::from_raw(lookup("GEMINI_API_KEY")),
            model: lookup("SEGMENT_AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            base_url: trim_slash(
                lookup("SEGMENT_AI_BASE_URL").unwrap_or_else(|| DEFAULT_AI_BASE_URL.to_string()),
            ),
        };

        let classification = ClassificationConfig {
            api_host: trim_slash(
                lookup("SEGMENT_API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            ),
            ..ClassificationConfig::default()
        };

        Ok(Self {
            bind_addr,
            ai,
            classification,
            strict_frequency,
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got {other:?}"),
        }),
    }
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
