use crate::participant::ParticipantId;
use crate::session::SessionStatus;
use debq_config::questionnaire::question::QuestionId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("answers are incomplete: missing {missing:?}, unexpected {unexpected:?}")]
    IncompleteAnswers {
        missing: Vec<QuestionId>,
        unexpected: Vec<QuestionId>,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("answer {0} is not one of the offered choices")]
    InvalidAnswer(i64),
    #[error("{operation} is not possible while the session is {state}")]
    InvalidState {
        operation: &'static str,
        state: SessionStatus,
    },
    #[error("participant {0} has not started a questionnaire")]
    NotStarted(ParticipantId),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl SessionError {
    /// Errors the transport drops silently. Everything else is an internal invariant violation.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Scoring(_))
    }
}
