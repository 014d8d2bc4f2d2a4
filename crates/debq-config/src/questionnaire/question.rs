use crate::questionnaire::error::ConfigurationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub type QuestionId = u32;

/// Number of questions in the DEBQ. Ids run from 1 to this value.
pub const QUESTION_COUNT: QuestionId = 33;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Question {
    /// # Unique identifier for the question
    /// Questions are asked in the order of their ids.
    pub id: QuestionId,
    /// # Text of the question
    /// Only used for display.
    pub text: String,
}

impl Question {
    pub fn new(id: QuestionId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }
}

/// The validated, immutable set of questions.
///
/// Questions are stored by position, so the question with id `n` lives at index `n - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Sorts the questions by id and checks that the ids are exactly `1..=QUESTION_COUNT`.
    pub fn new(mut questions: Vec<Question>) -> Result<Self, ConfigurationError> {
        questions.sort_by_key(|question| question.id);
        let ids_match = questions.len() == QUESTION_COUNT as usize
            && questions.iter().zip(1..=QUESTION_COUNT).all(|(question, id)| question.id == id);
        if !ids_match {
            return Err(ConfigurationError::InvalidQuestionIds {
                expected: QUESTION_COUNT,
                actual: questions.iter().map(|question| question.id).collect(),
            });
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
