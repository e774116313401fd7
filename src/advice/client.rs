//! Dashboard-side caller of the advice endpoint.

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use super::AdviceResponse;
use crate::profile::CustomerProfile;

/// Shown when a failure carries nothing more specific.
pub const MSG_ADVICE_UNAVAILABLE: &str = "AI 조언을 가져오는 중 문제가 발생했습니다.";

/// Anything that can answer an advice request.
///
/// Errors are user-facing messages, ready to render in the dialog.
#[async_trait]
pub trait AdviceSource: Send + Sync {
    async fn request_advice(
        &self,
        profile: &CustomerProfile,
        question: Option<&str>,
    ) -> Result<String, String>;
}

#[derive(Serialize)]
struct AdviceRequestBody<'a> {
    profile: &'a CustomerProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<&'a str>,
}

/// HTTP client for `POST /api/ai-advice`.
pub struct AdviceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AdviceClient {
    /// `base_url` is the host serving the endpoint, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/ai-advice", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Pick the message to show for a failed response body.
fn error_message_from_body(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"].as_str().map(str::to_string))
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
}

#[async_trait]
impl AdviceSource for AdviceClient {
    async fn request_advice(
        &self,
        profile: &CustomerProfile,
        question: Option<&str>,
    ) -> Result<String, String> {
        let body = AdviceRequestBody {
            profile,
            question: question.map(str::trim).filter(|q| !q.is_empty()),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "Advice request failed");
                non_empty_or_default(e.to_string())
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| non_empty_or_default(e.to_string()))?;

        if !status.is_success() {
            return Err(error_message_from_body(status, &text));
        }

        serde_json::from_str::<AdviceResponse>(&text)
            .map(|r| r.advice)
            .map_err(|e| non_empty_or_default(e.to_string()))
    }
}

fn non_empty_or_default(message: String) -> String {
    if message.trim().is_empty() {
        MSG_ADVICE_UNAVAILABLE.to_string()
    } else {
        message
    }
}
