use async_trait::async_trait;
use debq_config::questionnaire::question::{Question, QuestionId};
use debq_core::answer::LikertOption;
use debq_core::flow::Presenter;
use debq_core::participant::ParticipantId;
use debq_core::scoring::ScoreResult;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    Notice {
        participant_id: ParticipantId,
        text: String,
    },
    Question {
        participant_id: ParticipantId,
        question_id: QuestionId,
        choices: Vec<LikertOption>,
    },
    Result {
        participant_id: ParticipantId,
        result: ScoreResult,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("presenter is unavailable")]
pub struct PresenterUnavailable;

/// Presenter that remembers everything it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    presentations: Mutex<Vec<Presentation>>,
    failing: bool,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A presenter whose every call fails without recording anything.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn presentations(&self) -> Vec<Presentation> {
        self.presentations.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<Presentation> {
        self.presentations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    fn record(&self, presentation: Presentation) -> Result<(), PresenterUnavailable> {
        if self.failing {
            return Err(PresenterUnavailable);
        }
        self.presentations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(presentation);
        Ok(())
    }
}

#[async_trait]
impl Presenter for RecordingPresenter {
    type Error = PresenterUnavailable;

    async fn present_notice(&self, participant_id: ParticipantId, text: &str) -> Result<(), Self::Error> {
        self.record(Presentation::Notice {
            participant_id,
            text: text.to_owned(),
        })
    }

    async fn present_question(
        &self,
        participant_id: ParticipantId,
        question: &Question,
        choices: &[LikertOption],
    ) -> Result<(), Self::Error> {
        self.record(Presentation::Question {
            participant_id,
            question_id: question.id,
            choices: choices.to_vec(),
        })
    }

    async fn present_result(&self, participant_id: ParticipantId, result: &ScoreResult) -> Result<(), Self::Error> {
        self.record(Presentation::Result {
            participant_id,
            result: result.clone(),
        })
    }
}
