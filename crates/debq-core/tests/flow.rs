use debq_config::questionnaire::scale::ScaleKey;
use debq_core::answer::LIKERT_OPTIONS;
use debq_core::error::SessionError;
use debq_core::flow::{FlowError, Outcome, QuestionnaireFlow};
use debq_core::participant::ParticipantId;
use debq_core::registry::{SessionRegistry, lock};
use debq_core::report::{NOT_STARTED, WELCOME};
use debq_core::scoring::Classification;
use debq_core::session::SessionStatus;
use debq_test_helpers::{Presentation, RecordingPresenter, answer_sheet, numbered_questions};
use std::sync::Arc;
use std::time::{Duration, Instant};
use test_log::test;

const ALICE: ParticipantId = ParticipantId(1);
const BOB: ParticipantId = ParticipantId(2);

fn flow() -> QuestionnaireFlow {
    QuestionnaireFlow::new(Arc::new(SessionRegistry::new(numbered_questions())))
}

#[test(tokio::test)]
async fn test_start_sends_welcome_without_session() {
    let flow = flow();
    let presenter = RecordingPresenter::new();

    let outcome = flow.on_start(ALICE, &presenter).await.unwrap();

    assert_eq!(outcome, Outcome::Notified);
    assert_eq!(
        presenter.presentations(),
        vec![Presentation::Notice {
            participant_id: ALICE,
            text: WELCOME.to_owned(),
        }]
    );
    assert!(flow.registry().is_empty());
}

#[test(tokio::test)]
async fn test_test_command_presents_first_question() {
    let flow = flow();
    let presenter = RecordingPresenter::new();

    let outcome = flow.on_test(ALICE, &presenter).await.unwrap();

    assert_eq!(outcome, Outcome::Presented(1));
    assert_eq!(
        presenter.last(),
        Some(Presentation::Question {
            participant_id: ALICE,
            question_id: 1,
            choices: LIKERT_OPTIONS.to_vec(),
        })
    );
}

#[test(tokio::test)]
async fn test_full_questionnaire() {
    let flow = flow();
    let presenter = RecordingPresenter::new();
    flow.on_test(ALICE, &presenter).await.unwrap();

    let sheet = answer_sheet(3, &[(31, 1)]);
    let (last, rest) = sheet.split_last().unwrap();
    for (index, raw) in rest.iter().enumerate() {
        let outcome = flow.on_selection(ALICE, *raw, &presenter).await.unwrap();
        assert_eq!(outcome, Outcome::Presented(u32::try_from(index).unwrap() + 2));
    }
    let Outcome::Completed(result) = flow.on_selection(ALICE, *last, &presenter).await.unwrap() else {
        panic!("expected the last answer to complete the questionnaire");
    };

    assert_eq!(presenter.presentations().len(), 34);
    assert_eq!(
        presenter.last(),
        Some(Presentation::Result {
            participant_id: ALICE,
            result: result.clone(),
        })
    );
    for key in [ScaleKey::Restrained, ScaleKey::Emotional, ScaleKey::External] {
        assert_eq!(result.get(key).unwrap().classification, Classification::Above);
    }
    assert!((result.get(ScaleKey::External).unwrap().mean - 3.2).abs() < 1e-9);
}

#[test(tokio::test)]
async fn test_selection_after_completion_is_ignored() {
    let flow = flow();
    let presenter = RecordingPresenter::new();
    flow.on_test(ALICE, &presenter).await.unwrap();
    for raw in answer_sheet(2, &[]) {
        flow.on_selection(ALICE, raw, &presenter).await.unwrap();
    }
    let presented = presenter.presentations().len();

    let outcome = flow.on_selection(ALICE, 4, &presenter).await.unwrap();

    assert_eq!(
        outcome,
        Outcome::Ignored(SessionError::InvalidState {
            operation: "submit_answer",
            state: SessionStatus::Completed,
        })
    );
    assert_eq!(presenter.presentations().len(), presented);
}

#[test(tokio::test)]
async fn test_selection_without_session_asks_to_restart() {
    let flow = flow();
    let presenter = RecordingPresenter::new();

    let outcome = flow.on_selection(BOB, 3, &presenter).await.unwrap();

    assert_eq!(outcome, Outcome::Ignored(SessionError::NotStarted(BOB)));
    assert_eq!(
        presenter.presentations(),
        vec![Presentation::Notice {
            participant_id: BOB,
            text: NOT_STARTED.to_owned(),
        }]
    );
    assert!(flow.registry().is_empty());
}

#[test(tokio::test)]
async fn test_selection_after_eviction_asks_to_restart() {
    let flow = flow();
    let presenter = RecordingPresenter::new();
    flow.on_test(ALICE, &presenter).await.unwrap();
    flow.on_selection(ALICE, 4, &presenter).await.unwrap();

    let later = Instant::now() + Duration::from_secs(3600);
    assert_eq!(flow.registry().evict_idle_at(later, Duration::from_secs(60)), 1);

    let outcome = flow.on_selection(ALICE, 4, &presenter).await.unwrap();
    assert_eq!(outcome, Outcome::Ignored(SessionError::NotStarted(ALICE)));
    assert_eq!(
        presenter.last(),
        Some(Presentation::Notice {
            participant_id: ALICE,
            text: NOT_STARTED.to_owned(),
        })
    );

    flow.on_test(ALICE, &presenter).await.unwrap();
    let status = lock(&flow.registry().get(ALICE).unwrap()).status();
    assert_eq!(status, SessionStatus::AwaitingAnswer(1));
}

#[test(tokio::test)]
async fn test_invalid_selection_is_ignored() {
    let flow = flow();
    let presenter = RecordingPresenter::new();
    flow.on_test(ALICE, &presenter).await.unwrap();

    let outcome = flow.on_selection(ALICE, 9, &presenter).await.unwrap();

    assert_eq!(outcome, Outcome::Ignored(SessionError::InvalidAnswer(9)));
    assert_eq!(presenter.presentations().len(), 1);
    let session = flow.registry().get(ALICE).unwrap();
    assert_eq!(lock(&session).status(), SessionStatus::AwaitingAnswer(1));
}

#[test(tokio::test)]
async fn test_restart_discards_answers() {
    let flow = flow();
    let presenter = RecordingPresenter::new();
    flow.on_test(ALICE, &presenter).await.unwrap();
    for _ in 0..10 {
        flow.on_selection(ALICE, 5, &presenter).await.unwrap();
    }

    assert_eq!(flow.on_test(ALICE, &presenter).await.unwrap(), Outcome::Presented(1));

    let session = flow.registry().get(ALICE).unwrap();
    assert!(lock(&session).answers().is_empty());
    assert!(lock(&session).result().is_err());
}

#[test(tokio::test)]
async fn test_participants_do_not_interfere() {
    let flow = flow();
    let presenter = RecordingPresenter::new();
    flow.on_test(ALICE, &presenter).await.unwrap();
    flow.on_test(BOB, &presenter).await.unwrap();

    for _ in 0..5 {
        flow.on_selection(ALICE, 1, &presenter).await.unwrap();
    }
    let outcome = flow.on_selection(BOB, 2, &presenter).await.unwrap();

    assert_eq!(outcome, Outcome::Presented(2));
    let alice = flow.registry().get(ALICE).unwrap();
    assert_eq!(lock(&alice).status(), SessionStatus::AwaitingAnswer(6));
}

#[test(tokio::test)]
async fn test_presentation_failure_is_reported() {
    let flow = flow();
    let presenter = RecordingPresenter::failing();

    let error = flow.on_test(ALICE, &presenter).await.unwrap_err();

    let FlowError::Presentation { participant_id, .. } = error;
    assert_eq!(participant_id, ALICE);
    // the session was still reset
    let session = flow.registry().get(ALICE).unwrap();
    assert_eq!(lock(&session).status(), SessionStatus::AwaitingAnswer(1));
}
