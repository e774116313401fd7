//! Customer profile data model.

use serde::{Deserialize, Serialize};

/// Whether the customer subscribes.
///
/// Callers send either a boolean or a pre-formatted `"Yes"`/`"No"` label; both
/// are accepted and resolved to a label at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubscriptionStatus {
    Flag(bool),
    Label(String),
}

impl SubscriptionStatus {
    /// Label embedded in prompts. Booleans become `Yes`/`No`, labels pass through unchanged.
    pub fn label(&self) -> &str {
        match self {
            Self::Flag(true) => "Yes",
            Self::Flag(false) => "No",
            Self::Label(label) => label,
        }
    }

    pub fn is_subscribed(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Label(label) => label.trim().eq_ignore_ascii_case("yes"),
        }
    }

    /// Text shown next to the subscription switch.
    pub fn display_label(&self) -> &'static str {
        if self.is_subscribed() {
            "구독중"
        } else {
            "미 구독"
        }
    }
}

impl Default for SubscriptionStatus {
    fn default() -> Self {
        Self::Flag(false)
    }
}

/// The seven purchase frequencies offered by the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurchaseFrequency {
    Weekly,
    Fortnightly,
    Monthly,
    BiWeekly,
    Quarterly,
    EveryThreeMonths,
    Annually,
}

impl PurchaseFrequency {
    /// All options, in the order the form lists them.
    pub const ALL: [PurchaseFrequency; 7] = [
        Self::Weekly,
        Self::Fortnightly,
        Self::Monthly,
        Self::BiWeekly,
        Self::Quarterly,
        Self::EveryThreeMonths,
        Self::Annually,
    ];

    /// Wire value understood by the classification collaborator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Fortnightly => "Fortnightly",
            Self::Monthly => "Monthly",
            Self::BiWeekly => "Bi-Weekly",
            Self::Quarterly => "Quarterly",
            Self::EveryThreeMonths => "Every 3 Months",
            Self::Annually => "Annually",
        }
    }

    fn korean(&self) -> &'static str {
        match self {
            Self::Weekly => "매주",
            Self::Fortnightly => "2주마다",
            Self::Monthly => "매월",
            Self::BiWeekly => "격주",
            Self::Quarterly => "분기별",
            Self::EveryThreeMonths => "3개월마다",
            Self::Annually => "매년",
        }
    }

    /// Option text for the frequency select, e.g. `Weekly (매주)`.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.as_str(), self.korean())
    }
}

impl std::fmt::Display for PurchaseFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PurchaseFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str() == s)
            .ok_or_else(|| format!("unknown purchase frequency: {s}"))
    }
}

/// A hypothetical customer submitted for classification or advice.
///
/// Field names on the wire follow the classification collaborator; the
/// camelCase names are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    #[serde(rename = "Age", alias = "age")]
    pub age: u32,
    #[serde(rename = "Purchase Amount (USD)", alias = "purchaseAmount")]
    pub purchase_amount: f64,
    #[serde(rename = "Subscription Status", alias = "subscriptionStatus")]
    pub subscription_status: SubscriptionStatus,
    /// Kept as free text; see `ValidationOptions::strict_frequency`.
    #[serde(rename = "Frequency of Purchases", alias = "purchaseFrequency")]
    pub purchase_frequency: String,
}

impl Default for CustomerProfile {
    fn default() -> Self {
        Self {
            age: 0,
            purchase_amount: 0.0,
            subscription_status: SubscriptionStatus::default(),
            purchase_frequency: PurchaseFrequency::Weekly.as_str().to_string(),
        }
    }
}

impl CustomerProfile {
    /// The frequency as a known option, if it is one.
    pub fn frequency(&self) -> Option<PurchaseFrequency> {
        self.purchase_frequency.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_status_becomes_yes_no() {
        assert_eq!(SubscriptionStatus::Flag(true).label(), "Yes");
        assert_eq!(SubscriptionStatus::Flag(false).label(), "No");
    }

    #[test]
    fn string_status_passes_through() {
        let status = SubscriptionStatus::Label("yes please".into());
        assert_eq!(status.label(), "yes please");
        assert!(!status.is_subscribed());
        assert!(SubscriptionStatus::Label(" Yes ".into()).is_subscribed());
    }

    #[test]
    fn display_label_follows_flag() {
        assert_eq!(SubscriptionStatus::Flag(true).display_label(), "구독중");
        assert_eq!(SubscriptionStatus::Flag(false).display_label(), "미 구독");
    }

    #[test]
    fn frequency_parses_wire_values() {
        assert_eq!(
            "Bi-Weekly".parse::<PurchaseFrequency>().ok(),
            Some(PurchaseFrequency::BiWeekly)
        );
        assert_eq!(
            "Every 3 Months".parse::<PurchaseFrequency>().ok(),
            Some(PurchaseFrequency::EveryThreeMonths)
        );
        assert!("weekly".parse::<PurchaseFrequency>().is_err());
        assert_eq!(PurchaseFrequency::Quarterly.option_label(), "Quarterly (분기별)");
    }

    #[test]
    fn profile_uses_collaborator_field_names() {
        let profile = CustomerProfile {
            age: 35,
            purchase_amount: 20.0,
            subscription_status: SubscriptionStatus::Flag(true),
            purchase_frequency: "Weekly".into(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["Age"], 35);
        assert_eq!(json["Purchase Amount (USD)"], 20.0);
        assert_eq!(json["Subscription Status"], true);
        assert_eq!(json["Frequency of Purchases"], "Weekly");
    }

    #[test]
    fn profile_accepts_camel_case_and_labels() {
        let profile: CustomerProfile = serde_json::from_str(
            r#"{"age": 41, "purchaseAmount": 12.5, "subscriptionStatus": "No", "purchaseFrequency": "Monthly"}"#,
        )
        .unwrap();
        assert_eq!(profile.age, 41);
        assert_eq!(profile.subscription_status, SubscriptionStatus::Label("No".into()));
        assert_eq!(profile.frequency(), Some(PurchaseFrequency::Monthly));
    }
}
