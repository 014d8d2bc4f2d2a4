use crate::answer::Answer;
use crate::error::SessionError;
use crate::participant::ParticipantId;
use crate::scoring::{Answers, ScoreResult, score};
use debq_config::questionnaire::question::{QUESTION_COUNT, Question, QuestionId, QuestionSet};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

const FIRST_QUESTION: QuestionId = 1;

#[derive(Debug, Clone, PartialEq)]
enum SessionState {
    AwaitingAnswer(QuestionId),
    Completed(ScoreResult),
}

/// Where a session stands, without the result. Used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    AwaitingAnswer(QuestionId),
    Completed,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingAnswer(id) => write!(f, "awaiting an answer to question {id}"),
            Self::Completed => f.write_str("completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Advanced(QuestionId),
    Completed(ScoreResult),
}

/// One participant's pass through the questionnaire.
#[derive(Debug)]
pub struct Session {
    participant_id: ParticipantId,
    questions: Arc<QuestionSet>,
    state: SessionState,
    answers: Answers,
    last_activity: Instant,
}

impl Session {
    #[must_use]
    pub fn new(participant_id: ParticipantId, questions: Arc<QuestionSet>) -> Self {
        Self {
            participant_id,
            questions,
            state: SessionState::AwaitingAnswer(FIRST_QUESTION),
            answers: Answers::new(),
            last_activity: Instant::now(),
        }
    }

    /// Starts over at the first question and forgets all answers.
    pub fn start(&mut self) {
        tracing::debug!(
            participant_id = %self.participant_id,
            answered = self.answers.len(),
            "starting questionnaire"
        );
        self.state = SessionState::AwaitingAnswer(FIRST_QUESTION);
        self.answers.clear();
        self.touch();
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self.state {
            SessionState::AwaitingAnswer(id) => SessionStatus::AwaitingAnswer(id),
            SessionState::Completed(_) => SessionStatus::Completed,
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self.state, SessionState::Completed(_))
    }

    #[must_use]
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    #[must_use]
    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }

    pub fn current_question(&self) -> Result<&Question, SessionError> {
        let invalid_state = SessionError::InvalidState {
            operation: "current_question",
            state: self.status(),
        };
        match self.state {
            SessionState::AwaitingAnswer(id) => self.questions.get(id).ok_or(invalid_state),
            SessionState::Completed(_) => Err(invalid_state),
        }
    }

    /// Records the answer to the current question and moves on.
    ///
    /// The last answer scores the session. Rejected answers leave the session untouched apart
    /// from its activity timestamp.
    pub fn submit_answer(&mut self, raw: i64) -> Result<Transition, SessionError> {
        self.touch();
        let SessionState::AwaitingAnswer(current) = self.state else {
            return Err(SessionError::InvalidState {
                operation: "submit_answer",
                state: self.status(),
            });
        };
        let answer = Answer::new(raw).ok_or(SessionError::InvalidAnswer(raw))?;
        if self.answers.insert(current, answer).is_some() {
            tracing::warn!(participant_id = %self.participant_id, question = current, "question answered twice");
        }
        tracing::trace!(participant_id = %self.participant_id, question = current, answer = raw, "answer recorded");

        if current < QUESTION_COUNT {
            let next = current + 1;
            self.state = SessionState::AwaitingAnswer(next);
            return Ok(Transition::Advanced(next));
        }

        let result = score(&self.answers)?;
        self.state = SessionState::Completed(result.clone());
        Ok(Transition::Completed(result))
    }

    pub fn result(&self) -> Result<&ScoreResult, SessionError> {
        match &self.state {
            SessionState::Completed(result) => Ok(result),
            SessionState::AwaitingAnswer(_) => Err(SessionError::InvalidState {
                operation: "result",
                state: self.status(),
            }),
        }
    }

    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }
}
