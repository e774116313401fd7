//! Dialog flows: collect, validate, submit, show the outcome.
//!
//! Each dialog owns its own [`SubmissionState`]; the two flows share nothing.

pub mod advice;
pub mod analysis;
pub mod state;

pub use advice::AdviceDialog;
pub use analysis::AnalysisDialog;
pub use state::{DialogPhase, SubmissionState};
