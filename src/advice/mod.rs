//! AI advice flow.
//!
//! - `prompt`: deterministic prompt from a profile and optional question
//! - `service`: boundary checks plus the single model call
//! - `routes`: `POST /api/ai-advice`
//! - `client`: the dashboard's caller of that endpoint

pub mod client;
pub mod prompt;
pub mod routes;
pub mod service;

pub use client::{AdviceClient, AdviceSource};
pub use routes::{AdviceRouteState, advice_routes};
pub use service::AdviceService;

use serde::{Deserialize, Serialize};

/// Incoming request body before validation.
///
/// Both fields stay untyped so that only an unreadable body fails before the
/// credential check. Field type mismatches surface later, as validation
/// failures or as a stringified question.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAdviceRequest {
    #[serde(default)]
    pub profile: Option<serde_json::Value>,
    #[serde(default)]
    pub question: Option<serde_json::Value>,
}

/// Successful response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub advice: String,
}
