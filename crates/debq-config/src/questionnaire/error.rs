use crate::questionnaire::question::QuestionId;
use debq_utils::loader::error::LoadingError;
use thiserror::Error;

/// Anything wrong with the static setup. The process must not start when one of these occurs.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("questions must have the ids 1..={expected} without gaps or duplicates, got {actual:?}")]
    InvalidQuestionIds { expected: QuestionId, actual: Vec<QuestionId> },
    #[error("unsupported question file format: {0}")]
    UnsupportedFormat(String),
    #[error("required credential {0} is not set")]
    MissingCredential(&'static str),
    #[error(transparent)]
    Loading(#[from] LoadingError),
    #[error(transparent)]
    Yaml(#[from] serde_yml::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
