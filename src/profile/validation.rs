//! Profile validation. Runs before every outbound request.
//!
//! Checks run in a fixed order and the first failure is reported:
//! age, purchase amount, frequency. Subscription status is never a reason to
//! reject; it is only normalized into a label.

use serde_json::Value;

use super::model::{CustomerProfile, PurchaseFrequency, SubscriptionStatus};
use crate::error::ValidationError;

pub const MIN_AGE: f64 = 0.0;
pub const MAX_AGE: f64 = 120.0;

/// Knobs for the validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationOptions {
    /// Require the frequency to be one of [`PurchaseFrequency::ALL`] instead of any string.
    pub strict_frequency: bool,
}

/// Validate an untyped profile and convert it into a [`CustomerProfile`].
///
/// Type mismatches (age given as text, frequency given as a number, ...) are
/// validation failures rather than decoding errors, so callers can answer
/// them with the same message as out-of-range values.
pub fn validate_value(
    raw: &Value,
    options: ValidationOptions,
) -> Result<CustomerProfile, ValidationError> {
    let obj = raw.as_object().ok_or(ValidationError::NotAnObject)?;
    let field = |wire: &str, camel: &str| obj.get(wire).or_else(|| obj.get(camel));

    let age = field("Age", "age")
        .and_then(Value::as_f64)
        .ok_or(ValidationError::AgeNotNumber)?;
    let age = check_age(age)?;

    let amount = field("Purchase Amount (USD)", "purchaseAmount")
        .and_then(Value::as_f64)
        .ok_or(ValidationError::AmountNotNumber)?;
    check_amount(amount)?;

    let frequency = field("Frequency of Purchases", "purchaseFrequency")
        .and_then(Value::as_str)
        .ok_or(ValidationError::FrequencyNotString)?;
    check_frequency(frequency, options)?;

    let subscription_status = match field("Subscription Status", "subscriptionStatus") {
        Some(Value::Bool(flag)) => SubscriptionStatus::Flag(*flag),
        Some(Value::String(label)) => SubscriptionStatus::Label(label.clone()),
        None | Some(Value::Null) => SubscriptionStatus::Flag(false),
        Some(other) => SubscriptionStatus::Label(other.to_string()),
    };

    Ok(CustomerProfile {
        age,
        purchase_amount: amount,
        subscription_status,
        purchase_frequency: frequency.to_string(),
    })
}

/// Validate an already-typed profile, e.g. one built by a form.
pub fn validate(profile: &CustomerProfile, options: ValidationOptions) -> Result<(), ValidationError> {
    check_age(f64::from(profile.age))?;
    check_amount(profile.purchase_amount)?;
    check_frequency(&profile.purchase_frequency, options)
}

fn check_age(age: f64) -> Result<u32, ValidationError> {
    if !age.is_finite() {
        return Err(ValidationError::AgeNotNumber);
    }
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::AgeOutOfRange(age));
    }
    if age.fract() != 0.0 {
        return Err(ValidationError::AgeNotInteger(age));
    }
    Ok(age as u32)
}

fn check_amount(amount: f64) -> Result<(), ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::AmountNotNumber);
    }
    if amount < 0.0 {
        return Err(ValidationError::AmountNegative(amount));
    }
    Ok(())
}

fn check_frequency(frequency: &str, options: ValidationOptions) -> Result<(), ValidationError> {
    if options.strict_frequency && frequency.parse::<PurchaseFrequency>().is_err() {
        return Err(ValidationError::FrequencyUnknown(frequency.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const LENIENT: ValidationOptions = ValidationOptions {
        strict_frequency: false,
    };
    const STRICT: ValidationOptions = ValidationOptions {
        strict_frequency: true,
    };

    fn valid() -> Value {
        json!({
            "Age": 35,
            "Purchase Amount (USD)": 20,
            "Subscription Status": true,
            "Frequency of Purchases": "Weekly"
        })
    }

    #[test]
    fn accepts_valid_profile() {
        let profile = validate_value(&valid(), LENIENT).unwrap();
        assert_eq!(profile.age, 35);
        assert_eq!(profile.purchase_amount, 20.0);
        assert_eq!(profile.subscription_status, SubscriptionStatus::Flag(true));
        assert_eq!(profile.purchase_frequency, "Weekly");
    }

    #[test]
    fn accepts_bounds() {
        for age in [0, 120] {
            let mut raw = valid();
            raw["Age"] = json!(age);
            raw["Purchase Amount (USD)"] = json!(0);
            assert!(validate_value(&raw, LENIENT).is_ok(), "age {age}");
        }
    }

    #[test]
    fn rejects_age_out_of_range() {
        for age in [-1.0, 120.5, 121.0, 500.0] {
            let mut raw = valid();
            raw["Age"] = json!(age);
            assert!(
                matches!(
                    validate_value(&raw, LENIENT),
                    Err(ValidationError::AgeOutOfRange(_))
                ),
                "age {age}"
            );
        }
    }

    #[test]
    fn rejects_fractional_age() {
        let mut raw = valid();
        raw["Age"] = json!(35.5);
        assert_eq!(
            validate_value(&raw, LENIENT),
            Err(ValidationError::AgeNotInteger(35.5))
        );
    }

    #[test]
    fn rejects_non_numeric_age() {
        let mut raw = valid();
        raw["Age"] = json!("35");
        assert_eq!(validate_value(&raw, LENIENT), Err(ValidationError::AgeNotNumber));
    }

    #[test]
    fn rejects_negative_amount() {
        let mut raw = valid();
        raw["Purchase Amount (USD)"] = json!(-0.01);
        assert_eq!(
            validate_value(&raw, LENIENT),
            Err(ValidationError::AmountNegative(-0.01))
        );
    }

    #[test]
    fn age_checked_before_amount() {
        let mut raw = valid();
        raw["Age"] = json!(200);
        raw["Purchase Amount (USD)"] = json!(-5);
        assert!(matches!(
            validate_value(&raw, LENIENT),
            Err(ValidationError::AgeOutOfRange(_))
        ));
    }

    #[test]
    fn frequency_must_be_a_string() {
        let mut raw = valid();
        raw["Frequency of Purchases"] = json!(7);
        assert_eq!(
            validate_value(&raw, LENIENT),
            Err(ValidationError::FrequencyNotString)
        );
    }

    #[test]
    fn lenient_mode_accepts_any_frequency_text() {
        let mut raw = valid();
        raw["Frequency of Purchases"] = json!("Daily");
        assert!(validate_value(&raw, LENIENT).is_ok());
    }

    #[test]
    fn strict_mode_requires_known_frequency() {
        let mut raw = valid();
        raw["Frequency of Purchases"] = json!("Daily");
        assert_eq!(
            validate_value(&raw, STRICT),
            Err(ValidationError::FrequencyUnknown("Daily".into()))
        );
        raw["Frequency of Purchases"] = json!("Every 3 Months");
        assert!(validate_value(&raw, STRICT).is_ok());
    }

    #[test]
    fn subscription_label_is_kept() {
        let mut raw = valid();
        raw["Subscription Status"] = json!("No");
        let profile = validate_value(&raw, LENIENT).unwrap();
        assert_eq!(profile.subscription_status, SubscriptionStatus::Label("No".into()));
    }

    #[test]
    fn missing_subscription_reads_as_not_subscribed() {
        let mut raw = valid();
        raw.as_object_mut().unwrap().remove("Subscription Status");
        let profile = validate_value(&raw, LENIENT).unwrap();
        assert_eq!(profile.subscription_status, SubscriptionStatus::Flag(false));
        assert_eq!(profile.subscription_status.label(), "No");

        raw["Subscription Status"] = Value::Null;
        let profile = validate_value(&raw, STRICT).unwrap();
        assert_eq!(profile.subscription_status, SubscriptionStatus::Flag(false));
    }

    #[test]
    fn odd_subscription_value_is_kept_as_text() {
        let mut raw = valid();
        raw["Subscription Status"] = json!(1);
        let profile = validate_value(&raw, LENIENT).unwrap();
        assert_eq!(profile.subscription_status, SubscriptionStatus::Label("1".into()));
        assert_eq!(profile.subscription_status.label(), "1");
    }

    #[test]
    fn camel_case_fields_are_accepted() {
        let raw = json!({
            "age": 28,
            "purchaseAmount": 55.5,
            "subscriptionStatus": false,
            "purchaseFrequency": "Monthly"
        });
        let profile = validate_value(&raw, LENIENT).unwrap();
        assert_eq!(profile.age, 28);
        assert_eq!(profile.purchase_amount, 55.5);
    }

    #[test]
    fn non_object_is_rejected() {
        assert_eq!(
            validate_value(&json!([1, 2]), LENIENT),
            Err(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn typed_profile_checks_amount_and_frequency() {
        let mut profile = CustomerProfile::default();
        assert!(validate(&profile, STRICT).is_ok());

        profile.purchase_amount = f64::NAN;
        assert_eq!(validate(&profile, LENIENT), Err(ValidationError::AmountNotNumber));

        profile.purchase_amount = 10.0;
        profile.age = 121;
        assert!(matches!(
            validate(&profile, LENIENT),
            Err(ValidationError::AgeOutOfRange(_))
        ));

        profile.age = 30;
        profile.purchase_frequency = String::new();
        assert!(validate(&profile, LENIENT).is_ok());
        assert!(validate(&profile, STRICT).is_err());
    }
}
