//! Cluster summaries: read-only projections owned by the classification backend.

use serde::{Deserialize, Serialize};

/// Summary statistics for one customer segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_id: i64,
    #[serde(alias = "cluster_name", default)]
    pub name: String,
    pub avg_age: f64,
    pub avg_purchase_amount: f64,
    /// Fraction in 0..=1.
    pub subscription_rate: f64,
    /// Already a percentage.
    pub discount_usage_rate: f64,
    /// 0..=5 scale.
    pub review_rating_score: f64,
}

impl ClusterSummary {
    pub fn age_text(&self) -> String {
        format!("{}세", self.avg_age)
    }

    pub fn purchase_amount_text(&self) -> String {
        format!("${}", self.avg_purchase_amount)
    }

    /// `0.123` -> `"12.3 %"`.
    pub fn subscription_rate_text(&self) -> String {
        format!("{:.1} %", self.subscription_rate * 100.0)
    }

    pub fn discount_usage_text(&self) -> String {
        format!("{} %", self.discount_usage_rate)
    }

    pub fn rating_text(&self) -> String {
        format!("{} / 5", self.review_rating_score)
    }
}

/// The batch of clusters fetched once, plus the user's current selection.
#[derive(Debug, Clone, Default)]
pub struct ClusterCatalog {
    groups: Vec<ClusterSummary>,
    selected: Option<i64>,
}

impl ClusterCatalog {
    pub fn new(groups: Vec<ClusterSummary>) -> Self {
        Self {
            groups,
            selected: None,
        }
    }

    pub fn groups(&self) -> &[ClusterSummary] {
        &self.groups
    }

    pub fn get(&self, cluster_id: i64) -> Option<&ClusterSummary> {
        self.groups.iter().find(|g| g.cluster_id == cluster_id)
    }

    /// Select a cluster by id. Unknown ids clear the selection and return `None`.
    pub fn select(&mut self, cluster_id: i64) -> Option<&ClusterSummary> {
        self.selected = self.get(cluster_id).map(|g| g.cluster_id);
        self.selected()
    }

    pub fn selected(&self) -> Option<&ClusterSummary> {
        self.selected.and_then(|id| self.get(id))
    }
}
