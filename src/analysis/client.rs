//! HTTP client for the classification backend.
//!
//! Failures are logged and collapsed to `None` by the public calls, so a
//! caller only learns that the analysis did not succeed. The `try_*` variants
//! keep the reason for callers that want it.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clusters::{ClusterCatalog, ClusterSummary};
use crate::config::ClassificationConfig;
use crate::error::ClassificationError;
use crate::profile::CustomerProfile;

/// The backend's answer for one profile.
///
/// Only `predicted_cluster` is always present; richer deployments add a name
/// and description. Unknown fields are kept so nothing is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(alias = "predict_cluster")]
    pub predicted_cluster: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_description: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AnalysisResult {
    /// Best label for a notification: the name if known, otherwise the id.
    pub fn cluster_label(&self) -> String {
        match (&self.cluster_name, self.predicted_cluster) {
            (Some(name), _) if !name.trim().is_empty() => name.clone(),
            (_, Some(id)) => id.to_string(),
            _ => "-".to_string(),
        }
    }
}

/// Something that can classify a profile. Absence means "analysis failed".
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, profile: &CustomerProfile) -> Option<AnalysisResult>;
}

#[derive(Serialize)]
struct BatchRequest<'a> {
    profiles: &'a [CustomerProfile],
}

pub struct ClassificationClient {
    client: reqwest::Client,
    config: ClassificationConfig,
}

impl ClassificationClient {
    pub fn new(config: ClassificationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_host.trim_end_matches('/'), path)
    }

    /// Submit one profile. Any failure is logged and returned as `None`.
    pub async fn analyze(&self, profile: &CustomerProfile) -> Option<AnalysisResult> {
        match self.try_analyze(profile).await {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(error = %e, "Classification request failed");
                None
            }
        }
    }

    /// Submit one profile and keep the failure reason.
    pub async fn try_analyze(
        &self,
        profile: &CustomerProfile,
    ) -> Result<AnalysisResult, ClassificationError> {
        let url = self.url(&self.config.analysis_path);
        debug!(%url, age = profile.age, "Submitting profile for classification");
        let request = self.client.post(&url).json(profile);
        self.send_json(url, request).await
    }

    /// Submit several profiles at once. An empty slice makes no request.
    pub async fn analyze_batch(&self, profiles: &[CustomerProfile]) -> Option<Vec<AnalysisResult>> {
        if profiles.is_empty() {
            return Some(Vec::new());
        }
        let url = self.url(&self.config.batch_path);
        let request = self.client.post(&url).json(&BatchRequest { profiles });
        match self.send_json(url, request).await {
            Ok(results) => Some(results),
            Err(e) => {
                warn!(error = %e, count = profiles.len(), "Batch classification failed");
                None
            }
        }
    }

    /// Fetch the cluster summaries shown in the sidebar.
    pub async fn fetch_clusters(&self) -> Option<ClusterCatalog> {
        let url = self.url(&self.config.groups_path);
        let request = self.client.get(&url);
        match self.send_json::<Vec<ClusterSummary>>(url, request).await {
            Ok(groups) => Some(ClusterCatalog::new(groups)),
            Err(e) => {
                warn!(error = %e, "Fetching cluster summaries failed");
                None
            }
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClassificationError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => return Err(ClassificationError::Transport { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassificationError::Status {
                url,
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClassificationError::Decode {
                url,
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl Classifier for ClassificationClient {
    async fn classify(&self, profile: &CustomerProfile) -> Option<AnalysisResult> {
        self.analyze(profile).await
    }
}
