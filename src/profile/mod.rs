//! Customer profile shared by the classification and advice flows.

mod draft;
pub mod model;
pub mod validation;

pub use model::{CustomerProfile, PurchaseFrequency, SubscriptionStatus};
pub use validation::{ValidationOptions, validate, validate_value};
