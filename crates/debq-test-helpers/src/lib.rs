mod presenter;
mod question_file;

pub use presenter::*;
pub use question_file::*;

use debq_config::questionnaire::question::{QUESTION_COUNT, Question, QuestionId, QuestionSet};
use std::sync::Arc;

/// Questions `1..=33` with the text `Question {id}`.
#[must_use]
pub fn numbered_question_list() -> Vec<Question> {
    (1..=QUESTION_COUNT)
        .map(|id| Question::new(id, format!("Question {id}")))
        .collect()
}

#[must_use]
#[allow(clippy::expect_used)]
pub fn numbered_questions() -> Arc<QuestionSet> {
    Arc::new(QuestionSet::new(numbered_question_list()).expect("numbered questions are valid"))
}

/// Raw answers for all questions: `value` everywhere except for the given overrides.
#[must_use]
pub fn answer_sheet(value: i64, overrides: &[(QuestionId, i64)]) -> Vec<i64> {
    (1..=QUESTION_COUNT)
        .map(|id| {
            overrides
                .iter()
                .find(|(question, _)| *question == id)
                .map_or(value, |(_, raw)| *raw)
        })
        .collect()
}
