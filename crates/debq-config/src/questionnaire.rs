use crate::questionnaire::error::ConfigurationError;
use crate::questionnaire::question::{Question, QuestionId, QuestionSet};
use crate::questionnaire::v01::questionnaire::QuestionnaireV01;
use debq_utils::loader::{Filter, Loader, LoaderTrait};
use schemars::JsonSchema;
use serde::Deserialize;

pub mod error;
pub mod question;
pub mod scale;
pub mod v01;

pub const DEFAULT_ID: &str = "debq";
pub const DEFAULT_TITLE: &str = "Голландский опросник пищевого поведения (DEBQ)";

#[derive(Deserialize, Debug, JsonSchema)]
#[serde(tag = "version")]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { questionnaire: QuestionnaireV01 },
}

#[derive(Debug, Clone)]
pub struct Questionnaire {
    pub questionnaire_id: String,
    pub title: String,
    pub questions: QuestionSet,
}

/// An item of a plain `questions.json`. Keys other than `id` and `text` are ignored.
#[derive(Deserialize, Debug)]
struct JsonQuestion {
    id: QuestionId,
    text: String,
}

impl From<JsonQuestion> for Question {
    fn from(question: JsonQuestion) -> Self {
        Self::new(question.id, question.text)
    }
}

impl TryFrom<QuestionnaireV01> for Questionnaire {
    type Error = ConfigurationError;

    fn try_from(v01: QuestionnaireV01) -> Result<Self, Self::Error> {
        Ok(Self {
            questionnaire_id: v01.id,
            title: v01.title,
            questions: QuestionSet::new(v01.questions)?,
        })
    }
}

impl Questionnaire {
    /// Wraps a bare list of questions, as found in a plain `questions.json`.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, ConfigurationError> {
        Ok(Self {
            questionnaire_id: DEFAULT_ID.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            questions: QuestionSet::new(questions)?,
        })
    }
}

/// Parses a question file. The format is picked from the file extension.
pub fn parse(key: &str, content: &[u8]) -> Result<Questionnaire, ConfigurationError> {
    if Filter::Yaml.apply(key) {
        let VersionConfig::V01 { questionnaire } = serde_yml::from_slice::<VersionConfig>(content)?;
        questionnaire.try_into()
    } else if Filter::Json.apply(key) {
        let questions = serde_json::from_slice::<Vec<JsonQuestion>>(content)?;
        Questionnaire::from_questions(questions.into_iter().map(Question::from).collect())
    } else {
        Err(ConfigurationError::UnsupportedFormat(key.to_owned()))
    }
}

pub async fn load(loader: &Loader, file: &str) -> Result<Questionnaire, ConfigurationError> {
    tracing::debug!(file, "Loading questionnaire");
    let file = loader.load_file(file).await?;
    let questionnaire = parse(&file.metadata.key, &file.content).inspect_err(|error| {
        tracing::error!(
            error = error as &dyn std::error::Error,
            key = file.metadata.key,
            "invalid question file"
        );
    })?;
    tracing::debug!(
        questionnaire_id = questionnaire.questionnaire_id,
        questions = questionnaire.questions.len(),
        "loaded questionnaire"
    );
    Ok(questionnaire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use debq_utils::loader::memory::MemoryLoader;
    use std::fs::read;
    use test_log::test;

    #[test]
    fn test_yaml_loading() {
        let content = read("test_configs/test.questionnaire.yaml").unwrap();
        let questionnaire = parse("test.questionnaire.yaml", &content).unwrap();
        assert_eq!(questionnaire.questionnaire_id, "test");
        assert_eq!(questionnaire.questions.len(), 33);
        assert_eq!(questionnaire.questions.get(1).map(|q| q.text.as_str()), Some("Question 1"));
    }

    #[test]
    fn test_shipped_questionnaire() {
        let content = read("../../config/debq.questionnaire.yaml").unwrap();
        let questionnaire = parse("debq.questionnaire.yaml", &content).unwrap();
        assert_eq!(questionnaire.questionnaire_id, DEFAULT_ID);
        assert_eq!(questionnaire.title, DEFAULT_TITLE);
        assert!(questionnaire.questions.iter().all(|q| !q.text.is_empty()));
    }

    #[test]
    fn test_json_loading() {
        let content = read("test_configs/questions.json").unwrap();
        let questionnaire = parse("questions.json", &content).unwrap();
        assert_eq!(questionnaire.questionnaire_id, DEFAULT_ID);
        assert_eq!(questionnaire.title, DEFAULT_TITLE);
        assert_eq!(questionnaire.questions.get(33).map(|q| q.text.as_str()), Some("Question 33"));
    }

    #[test]
    fn test_json_ignores_extra_keys() {
        let content = read("test_configs/extra_keys.questions.json").unwrap();
        let questionnaire = parse("extra_keys.questions.json", &content).unwrap();
        assert_eq!(questionnaire.questions.len(), 33);
        assert_eq!(questionnaire.questions.get(31), Some(&Question::new(31, "Question 31")));
    }

    #[test]
    fn test_json_with_gap_is_rejected() {
        let content = read("test_configs/gap.questions.json").unwrap();
        let result = parse("gap.questions.json", &content);
        assert!(matches!(result, Err(ConfigurationError::InvalidQuestionIds { .. })));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let content = br#"
version: "0.1"
questionnaire:
  id: test
  title: Test
  colour: blue
  questions: []
"#;
        assert!(matches!(parse("q.yaml", content), Err(ConfigurationError::Yaml(_))));
    }

    #[test]
    fn test_unsupported_format() {
        assert!(matches!(
            parse("questions.toml", b""),
            Err(ConfigurationError::UnsupportedFormat(key)) if key == "questions.toml"
        ));
    }

    #[test(tokio::test)]
    async fn test_load_through_loader() {
        let content = read("test_configs/questions.json").unwrap();
        let loader = Loader::Memory(MemoryLoader::new([("questions.json", content)]));
        let questionnaire = load(&loader, "questions.json").await.unwrap();
        assert_eq!(questionnaire.questions.len(), 33);

        assert!(matches!(
            load(&loader, "other.json").await,
            Err(ConfigurationError::Loading(_))
        ));
    }
}
