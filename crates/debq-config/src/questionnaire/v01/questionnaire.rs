use crate::questionnaire::question::Question;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct QuestionnaireV01 {
    /// # Unique identifier for the questionnaire
    pub id: String,
    /// # Title of the questionnaire
    /// A human-readable title, shown in logs and tooling.
    pub title: String,
    /// # Questions of the questionnaire
    /// Every id from 1 to 33 has to be present exactly once.
    pub questions: Vec<Question>,
}
