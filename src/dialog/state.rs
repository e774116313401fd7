//! Submission state machine, one per dialog instance.

use crate::error::DialogError;

/// The phases of a dialog submission.
///
/// Idle → Submitting → Success | Failed, and from Success or Failed back into
/// Submitting on the next submit. Closing the dialog returns to Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Idle,
    Submitting,
    Success,
    Failed,
}

impl DialogPhase {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: DialogPhase) -> bool {
        use DialogPhase::*;
        matches!(
            (self, target),
            (Idle | Success | Failed, Submitting)
                | (Submitting, Success | Failed)
                | (_, Idle)
        )
    }
}

impl std::fmt::Display for DialogPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// Current submission state, carrying the result or error where there is one.
///
/// Result and error are never both present, and neither survives the start
/// of a new submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState<T> {
    Idle,
    Submitting,
    Success(T),
    Failed(String),
}

impl<T> Default for SubmissionState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> SubmissionState<T> {
    pub fn phase(&self) -> DialogPhase {
        match self {
            Self::Idle => DialogPhase::Idle,
            Self::Submitting => DialogPhase::Submitting,
            Self::Success(_) => DialogPhase::Success,
            Self::Failed(_) => DialogPhase::Failed,
        }
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Submitting`, dropping any previous result or error.
    pub fn begin(&mut self) -> Result<(), DialogError> {
        if self.is_submitting() {
            return Err(DialogError::AlreadySubmitting);
        }
        self.transition(DialogPhase::Submitting)?;
        *self = Self::Submitting;
        Ok(())
    }

    /// Leave `Submitting` with the outcome of the request.
    pub fn resolve(&mut self, outcome: Result<T, String>) -> Result<(), DialogError> {
        let target = match outcome {
            Ok(_) => DialogPhase::Success,
            Err(_) => DialogPhase::Failed,
        };
        self.transition(target)?;
        *self = match outcome {
            Ok(value) => Self::Success(value),
            Err(message) => Self::Failed(message),
        };
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    fn transition(&self, target: DialogPhase) -> Result<(), DialogError> {
        let from = self.phase();
        if from.can_transition_to(target) {
            Ok(())
        } else {
            Err(DialogError::InvalidTransition {
                from: from.to_string(),
                to: target.to_string(),
            })
        }
    }
}
