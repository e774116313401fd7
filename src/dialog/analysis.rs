//! Analysis dialog. Submits a hypothetical shopper to the classifier.

use tracing::info;

use super::state::{DialogPhase, SubmissionState};
use crate::analysis::{AnalysisResult, Classifier};
use crate::error::{DialogError, MSG_PROFILE_INVALID};
use crate::profile::{self, CustomerProfile, ValidationOptions};

pub const MSG_ANALYSIS_REQUESTED: &str = "서버에 분석을 요청했습니다...";
pub const MSG_ANALYSIS_FAILED: &str = "분석 실패";

pub struct AnalysisDialog {
    pub profile: CustomerProfile,
    validation: ValidationOptions,
    state: SubmissionState<AnalysisResult>,
}

impl Default for AnalysisDialog {
    fn default() -> Self {
        Self::new(ValidationOptions::default())
    }
}

impl AnalysisDialog {
    pub fn new(validation: ValidationOptions) -> Self {
        Self {
            profile: CustomerProfile::default(),
            validation,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState<AnalysisResult> {
        &self.state
    }

    pub fn phase(&self) -> DialogPhase {
        self.state.phase()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.state.result()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn close(&mut self) {
        self.profile.reset();
        self.state.reset();
    }

    /// Notification text for the current state.
    pub fn notification(&self) -> Option<String> {
        match &self.state {
            SubmissionState::Idle => None,
            SubmissionState::Submitting => Some(MSG_ANALYSIS_REQUESTED.to_string()),
            SubmissionState::Success(result) => {
                Some(format!("분석완료 고객님은 {}", result.cluster_label()))
            }
            SubmissionState::Failed(message) => Some(message.clone()),
        }
    }

    /// Validate the profile, then classify it.
    ///
    /// An invalid profile fails without contacting the classifier. Any
    /// classifier failure shows up as the same "analysis failed" message.
    pub async fn submit<C>(&mut self, classifier: &C) -> Result<(), DialogError>
    where
        C: Classifier + ?Sized,
    {
        self.state.begin()?;

        if let Err(e) = profile::validate(&self.profile, self.validation) {
            info!(error = %e, "Profile rejected before classification");
            return self.state.resolve(Err(MSG_PROFILE_INVALID.to_string()));
        }

        match classifier.classify(&self.profile).await {
            Some(result) => {
                info!(cluster = %result.cluster_label(), "Profile classified");
                self.state.resolve(Ok(result))?;
                self.profile.reset();
                Ok(())
            }
            None => self.state.resolve(Err(MSG_ANALYSIS_FAILED.to_string())),
        }
    }
}
