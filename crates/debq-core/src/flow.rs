use crate::answer::{LIKERT_OPTIONS, LikertOption};
use crate::error::SessionError;
use crate::participant::ParticipantId;
use crate::registry::{SessionRegistry, lock};
use crate::report::{NOT_STARTED, WELCOME};
use crate::scoring::ScoreResult;
use crate::session::Transition;
use async_trait::async_trait;
use debq_config::questionnaire::question::{Question, QuestionId};
use std::sync::Arc;
use thiserror::Error;

/// Outbound half of a transport. Implementations decide how things are shown, e.g. whether a
/// question replaces the previous one or is sent as a new message.
#[async_trait]
pub trait Presenter: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn present_notice(&self, participant_id: ParticipantId, text: &str) -> Result<(), Self::Error>;

    async fn present_question(
        &self,
        participant_id: ParticipantId,
        question: &Question,
        choices: &[LikertOption],
    ) -> Result<(), Self::Error>;

    async fn present_result(&self, participant_id: ParticipantId, result: &ScoreResult) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A notice was shown and no session was touched.
    Notified,
    Presented(QuestionId),
    Completed(ScoreResult),
    /// The event did not fit the session and was dropped.
    Ignored(SessionError),
    /// The session hit an internal error and was discarded.
    Aborted,
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("failed to present to participant {participant_id}")]
    Presentation {
        participant_id: ParticipantId,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl FlowError {
    fn presentation(participant_id: ParticipantId, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Presentation {
            participant_id,
            source: Box::new(source),
        }
    }
}

/// Turns transport commands into session transitions and presents the outcome.
///
/// Session locks are released before anything is presented, so a slow transport never blocks
/// other events.
#[derive(Debug, Clone)]
pub struct QuestionnaireFlow {
    registry: Arc<SessionRegistry>,
}

impl QuestionnaireFlow {
    #[must_use]
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    #[tracing::instrument(skip_all, fields(%participant_id))]
    pub async fn on_start<P: Presenter>(
        &self,
        participant_id: ParticipantId,
        presenter: &P,
    ) -> Result<Outcome, FlowError> {
        presenter
            .present_notice(participant_id, WELCOME)
            .await
            .map_err(|error| FlowError::presentation(participant_id, error))?;
        Ok(Outcome::Notified)
    }

    #[tracing::instrument(skip_all, fields(%participant_id))]
    pub async fn on_test<P: Presenter>(&self, participant_id: ParticipantId, presenter: &P) -> Result<Outcome, FlowError> {
        let question = {
            let handle = self.registry.reset(participant_id);
            let session = lock(&handle);
            match session.current_question() {
                Ok(question) => question.clone(),
                Err(error) => return Ok(Outcome::Ignored(error)),
            }
        };
        tracing::info!(question = question.id, "questionnaire started");
        present_question(participant_id, &question, presenter).await
    }

    #[tracing::instrument(skip_all, fields(%participant_id, value))]
    pub async fn on_selection<P: Presenter>(
        &self,
        participant_id: ParticipantId,
        value: i64,
        presenter: &P,
    ) -> Result<Outcome, FlowError> {
        let Some(handle) = self.registry.get(participant_id) else {
            tracing::debug!("selection without a session");
            presenter
                .present_notice(participant_id, NOT_STARTED)
                .await
                .map_err(|error| FlowError::presentation(participant_id, error))?;
            return Ok(Outcome::Ignored(SessionError::NotStarted(participant_id)));
        };

        let next = {
            let mut session = lock(&handle);
            match session.submit_answer(value) {
                Ok(Transition::Advanced(_)) => session
                    .current_question()
                    .map(|question| Next::Question(question.clone())),
                Ok(Transition::Completed(result)) => Ok(Next::Result(result)),
                Err(error) => Err(error),
            }
        };

        match next {
            Ok(Next::Question(question)) => present_question(participant_id, &question, presenter).await,
            Ok(Next::Result(result)) => {
                tracing::info!(?result, "questionnaire completed");
                presenter
                    .present_result(participant_id, &result)
                    .await
                    .map_err(|error| FlowError::presentation(participant_id, error))?;
                Ok(Outcome::Completed(result))
            }
            Err(error) if error.is_recoverable() => {
                tracing::debug!(error = &error as &dyn std::error::Error, "ignoring selection");
                Ok(Outcome::Ignored(error))
            }
            Err(error) => {
                tracing::error!(error = &error as &dyn std::error::Error, "aborting session");
                self.registry.remove(participant_id);
                Ok(Outcome::Aborted)
            }
        }
    }
}

async fn present_question<P: Presenter>(
    participant_id: ParticipantId,
    question: &Question,
    presenter: &P,
) -> Result<Outcome, FlowError> {
    presenter
        .present_question(participant_id, question, &LIKERT_OPTIONS)
        .await
        .map_err(|error| FlowError::presentation(participant_id, error))?;
    Ok(Outcome::Presented(question.id))
}

enum Next {
    Question(Question),
    Result(ScoreResult),
}
