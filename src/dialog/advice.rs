//! Advice dialog: profile plus free-text question, answered by an [`AdviceSource`].

use tracing::debug;

use super::state::{DialogPhase, SubmissionState};
use crate::advice::AdviceSource;
use crate::error::DialogError;
use crate::profile::CustomerProfile;

pub struct AdviceDialog {
    pub profile: CustomerProfile,
    pub question: String,
    state: SubmissionState<String>,
}

impl Default for AdviceDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl AdviceDialog {
    pub fn new() -> Self {
        Self {
            profile: CustomerProfile::default(),
            question: String::new(),
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState<String> {
        &self.state
    }

    pub fn phase(&self) -> DialogPhase {
        self.state.phase()
    }

    pub fn advice(&self) -> Option<&str> {
        self.state.result().map(String::as_str)
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Opening or closing the dialog starts over with a fresh profile.
    pub fn close(&mut self) {
        *self = Self::new();
    }

    pub fn submit_label(&self) -> &'static str {
        if self.state.is_submitting() {
            "생성 중..."
        } else {
            "AI 조언 생성"
        }
    }

    /// Inline status line, if there is anything to show besides the advice itself.
    pub fn status_text(&self) -> Option<String> {
        match &self.state {
            SubmissionState::Submitting => Some("AI가 조언을 생성하고 있습니다...".to_string()),
            SubmissionState::Failed(message) => Some(format!("오류: {message}")),
            _ => None,
        }
    }

    /// Send the current profile and question, waiting for the answer.
    ///
    /// Holding `&mut self` across the call means a dialog can never have two
    /// requests in flight. A successful answer resets the profile and question.
    pub async fn submit<S>(&mut self, source: &S) -> Result<(), DialogError>
    where
        S: AdviceSource + ?Sized,
    {
        self.state.begin()?;
        debug!(age = self.profile.age, "Submitting advice request");

        let question = Some(self.question.as_str()).filter(|q| !q.trim().is_empty());
        let outcome = source.request_advice(&self.profile, question).await;
        let succeeded = outcome.is_ok();
        self.state.resolve(outcome)?;

        if succeeded {
            self.profile.reset();
            self.question.clear();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Replays scripted answers and records what it was asked.
    struct ScriptedSource {
        answers: Mutex<Vec<Result<String, String>>>,
        seen: Mutex<Vec<(CustomerProfile, Option<String>)>>,
    }

    impl ScriptedSource {
        fn new(mut answers: Vec<Result<String, String>>) -> Self {
            answers.reverse();
            Self {
                answers: Mutex::new(answers),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AdviceSource for ScriptedSource {
        async fn request_advice(
            &self,
            profile: &CustomerProfile,
            question: Option<&str>,
        ) -> Result<String, String> {
            self.seen
                .lock()
                .unwrap()
                .push((profile.clone(), question.map(str::to_string)));
            self.answers
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err("no more answers".into()))
        }
    }

    #[tokio::test]
    async fn failed_submit_then_retry() {
        let source = ScriptedSource::new(vec![Err("quota".into()), Ok("- tip".into())]);
        let mut dialog = AdviceDialog::new();
        dialog.profile.set_age_input("35");
        dialog.question = "할인은?".into();

        dialog.submit(&source).await.unwrap();
        assert_eq!(dialog.phase(), DialogPhase::Failed);
        assert_eq!(dialog.error(), Some("quota"));
        assert!(dialog.advice().is_none());
        assert_eq!(dialog.status_text().as_deref(), Some("오류: quota"));
        // Inputs survive a failure.
        assert_eq!(dialog.profile.age, 35);

        dialog.submit(&source).await.unwrap();
        assert_eq!(dialog.phase(), DialogPhase::Success);
        assert_eq!(dialog.advice(), Some("- tip"));
        assert!(dialog.error().is_none());
        assert!(dialog.status_text().is_none());
        assert_eq!(dialog.profile, CustomerProfile::default());

        let seen = source.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].1.as_deref(), Some("할인은?"));
    }

    #[tokio::test]
    async fn blank_question_is_not_sent() {
        let source = ScriptedSource::new(vec![Ok("ok".into())]);
        let mut dialog = AdviceDialog::new();
        dialog.question = "   ".into();
        dialog.submit(&source).await.unwrap();
        assert_eq!(source.seen.lock().unwrap()[0].1, None);
    }

    #[test]
    fn labels_follow_state() {
        let mut dialog = AdviceDialog::new();
        assert_eq!(dialog.submit_label(), "AI 조언 생성");
        dialog.state.begin().unwrap();
        assert_eq!(dialog.submit_label(), "생성 중...");
        assert_eq!(
            dialog.status_text().as_deref(),
            Some("AI가 조언을 생성하고 있습니다...")
        );
    }

    #[tokio::test]
    async fn close_resets_everything() {
        let source = ScriptedSource::new(vec![Err("down".into())]);
        let mut dialog = AdviceDialog::new();
        dialog.profile.set_subscribed(true);
        dialog.submit(&source).await.unwrap();

        dialog.close();
        assert_eq!(dialog.phase(), DialogPhase::Idle);
        assert!(dialog.error().is_none());
        assert_eq!(dialog.profile, CustomerProfile::default());
    }
}
