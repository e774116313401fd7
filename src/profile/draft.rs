//! Form-side editing of a profile.
//!
//! Text inputs are normalized the way the profile form does it: unparsable
//! input becomes zero and values are clamped into range, so a draft is always
//! within the validator's bounds.

use super::model::{CustomerProfile, PurchaseFrequency, SubscriptionStatus};
use super::validation::MAX_AGE;

impl CustomerProfile {
    /// Set the age from raw input text. Leading digits are used, anything else is 0.
    pub fn set_age_input(&mut self, text: &str) {
        let age = parse_leading_int(text).unwrap_or(0);
        self.age = age.clamp(0, MAX_AGE as i64) as u32;
    }

    /// Set the purchase amount from raw input text. Negative or unparsable input becomes 0.
    pub fn set_amount_input(&mut self, text: &str) {
        let amount = parse_leading_float(text).unwrap_or(0.0);
        self.purchase_amount = if amount.is_finite() && amount > 0.0 {
            amount
        } else {
            0.0
        };
    }

    pub fn set_subscribed(&mut self, subscribed: bool) {
        self.subscription_status = SubscriptionStatus::Flag(subscribed);
    }

    pub fn set_frequency(&mut self, frequency: PurchaseFrequency) {
        self.purchase_frequency = frequency.as_str().to_string();
    }

    /// Back to the form defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Integer prefix of `text`, ignoring leading whitespace: `"35세"` -> 35.
fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    // Saturate absurdly long inputs instead of failing.
    text[..sign_len + digits].parse::<i64>().ok().or_else(|| {
        Some(if text.starts_with('-') { i64::MIN } else { i64::MAX })
    })
}

/// Longest float prefix of `text`, ignoring leading whitespace: `"20.5$"` -> 20.5.
fn parse_leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let candidate_len = text
        .bytes()
        .take_while(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        .count();
    (1..=candidate_len)
        .rev()
        .find_map(|len| text[..len].parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_input_is_clamped() {
        let mut profile = CustomerProfile::default();
        profile.set_age_input("35");
        assert_eq!(profile.age, 35);
        profile.set_age_input("150");
        assert_eq!(profile.age, 120);
        profile.set_age_input("-4");
        assert_eq!(profile.age, 0);
        profile.set_age_input("99999999999999999999999");
        assert_eq!(profile.age, 120);
    }

    #[test]
    fn age_input_uses_leading_digits() {
        let mut profile = CustomerProfile::default();
        profile.set_age_input(" 42세");
        assert_eq!(profile.age, 42);
        profile.set_age_input("abc");
        assert_eq!(profile.age, 0);
        profile.set_age_input("");
        assert_eq!(profile.age, 0);
    }

    #[test]
    fn amount_input_parses_prefix() {
        let mut profile = CustomerProfile::default();
        profile.set_amount_input("20.5$");
        assert_eq!(profile.purchase_amount, 20.5);
        profile.set_amount_input("1e2");
        assert_eq!(profile.purchase_amount, 100.0);
        profile.set_amount_input("-3");
        assert_eq!(profile.purchase_amount, 0.0);
        profile.set_amount_input("n/a");
        assert_eq!(profile.purchase_amount, 0.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut profile = CustomerProfile::default();
        profile.set_age_input("60");
        profile.set_subscribed(true);
        profile.set_frequency(PurchaseFrequency::Annually);
        assert_eq!(profile.purchase_frequency, "Annually");

        profile.reset();
        assert_eq!(profile, CustomerProfile::default());
        assert_eq!(profile.purchase_frequency, "Weekly");
    }
}
