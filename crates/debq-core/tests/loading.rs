use debq_config::questionnaire::error::ConfigurationError;
use debq_config::questionnaire::load;
use debq_core::participant::ParticipantId;
use debq_core::registry::{SessionRegistry, lock};
use debq_test_helpers::{QuestionFile, numbered_question_list};
use debq_utils::loader::loader_for;
use std::sync::Arc;
use test_log::test;

#[test(tokio::test)]
async fn test_sessions_use_questions_from_file() {
    let mut questions = numbered_question_list();
    questions.reverse();
    questions[0].text = "Last question".to_owned();
    let file = QuestionFile::json(&questions).unwrap();

    let (loader, name) = loader_for(&file.location()).unwrap();
    let questionnaire = load(&loader, &name).await.unwrap();
    let registry = SessionRegistry::new(Arc::new(questionnaire.questions));

    let session = registry.reset(ParticipantId(3));
    let mut session = lock(&session);
    assert_eq!(session.current_question().unwrap().text, "Question 1");
    for _ in 1..33 {
        session.submit_answer(1).unwrap();
    }
    assert_eq!(session.current_question().unwrap().text, "Last question");
}

#[test(tokio::test)]
async fn test_invalid_file_is_rejected() {
    let file = QuestionFile::with_content("questions.json", r#"[{"id": 1, "text": "Only one"}]"#).unwrap();

    let (loader, name) = loader_for(&file.location()).unwrap();
    let error = load(&loader, &name).await.unwrap_err();

    assert!(matches!(error, ConfigurationError::InvalidQuestionIds { expected: 33, .. }));
}

#[test(tokio::test)]
async fn test_missing_file_is_rejected() {
    let file = QuestionFile::json(&numbered_question_list()).unwrap();
    let location = file.path().with_file_name("other.json").display().to_string();

    let (loader, name) = loader_for(&location).unwrap();

    assert!(matches!(
        load(&loader, &name).await,
        Err(ConfigurationError::Loading(_))
    ));
}
