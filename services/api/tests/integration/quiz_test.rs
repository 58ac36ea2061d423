use careerpath_api::domain::types::QUIZ_LIMIT;
use careerpath_api::usecase::contact::SubmitContactUseCase;
use careerpath_api::usecase::counselor::ListCounselorsUseCase;
use careerpath_api::usecase::quiz::{GetQuestionsUseCase, SubmitTestUseCase};
use careerpath_domain::contact::ContactMessage;
use careerpath_domain::quiz::TestSubmission;
use careerpath_testing::careers::{CareerBuilder, sample_catalog};

use crate::helpers::{
    InMemoryCareerRepo, InMemoryContactRepo, InMemoryCounselorRepo, InMemoryHistoryRepo,
    InMemoryQuestionRepo, answers,
};

fn submit_uc(
    careers: InMemoryCareerRepo,
) -> SubmitTestUseCase<InMemoryCareerRepo, InMemoryHistoryRepo> {
    SubmitTestUseCase {
        careers,
        history: InMemoryHistoryRepo::default(),
    }
}

#[tokio::test]
async fn should_recommend_trades_with_matching_employer() {
    let careers = InMemoryCareerRepo::with(sample_catalog());
    let uc = submit_uc(careers.clone());

    let result = uc
        .execute(TestSubmission {
            user_id: Some("guest-1".into()),
            answers: answers(&["fix", "self"]),
        })
        .await
        .unwrap();

    let stored = careers.careers.lock().unwrap();
    let plumber = stored
        .iter()
        .find(|c| c.record.name_en == "Plumber")
        .unwrap();
    assert_eq!(result.recommended_ids, vec![plumber.id.as_str()]);
    assert_eq!(result.user_id.as_deref(), Some("guest-1"));
}

#[tokio::test]
async fn should_recommend_nothing_when_answers_conflict() {
    let uc = submit_uc(InMemoryCareerRepo::with(sample_catalog()));
    let result = uc
        .execute(TestSubmission {
            user_id: None,
            answers: answers(&["fix", "govt"]),
        })
        .await
        .unwrap();
    assert!(result.recommended_ids.is_empty());
}

#[tokio::test]
async fn should_cap_unrestricted_recommendations() {
    let many = (0..10)
        .map(|i| CareerBuilder::new(&format!("Career {i}")).build())
        .collect();
    let uc = submit_uc(InMemoryCareerRepo::with(many));
    let result = uc
        .execute(TestSubmission {
            user_id: None,
            answers: answers(&["unknown_key", "out", "pay"]),
        })
        .await
        .unwrap();
    assert_eq!(result.recommended_ids.len(), QUIZ_LIMIT as usize);
}

#[tokio::test]
async fn should_persist_history_for_each_submission() {
    let uc = submit_uc(InMemoryCareerRepo::with(sample_catalog()));
    let history = uc.history.entries.clone();

    uc.execute(TestSubmission {
        user_id: None,
        answers: answers(&["create"]),
    })
    .await
    .unwrap();
    uc.execute(TestSubmission {
        user_id: Some("guest-2".into()),
        answers: answers(&["logic", "private"]),
    })
    .await
    .unwrap();

    let entries = history.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].user_id, "guest");
    assert_eq!(entries[0].recommended_ids.len(), 1);
    assert_eq!(entries[1].user_id, "guest-2");
    assert_eq!(entries[1].answers, vec!["logic", "private"]);
    assert_eq!(entries[1].recommended_ids.len(), 1);
}

#[tokio::test]
async fn should_serve_seeded_questions_in_step_order() {
    let repo = InMemoryQuestionRepo::default();
    let questions = GetQuestionsUseCase { repo: repo.clone() }
        .execute()
        .await
        .unwrap();
    assert_eq!(questions.len(), 5);
    assert!(questions.windows(2).all(|w| w[0].step < w[1].step));

    let json = serde_json::to_value(&questions[0]).unwrap();
    assert!(json.get("id").is_none());
    assert!(json.get("_id").is_none());
}

#[tokio::test]
async fn should_seed_counselors_with_ids() {
    let counselors = ListCounselorsUseCase {
        repo: InMemoryCounselorRepo::default(),
    }
    .execute()
    .await
    .unwrap();
    assert_eq!(counselors.len(), 2);
    let json = serde_json::to_value(&counselors[0]).unwrap();
    assert_eq!(json["name"], "Anitha R.");
    assert_eq!(json["district"], "Anantapur");
    assert!(json["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn should_store_contact_message() {
    let repo = InMemoryContactRepo::default();
    let message: ContactMessage = serde_json::from_value(serde_json::json!({
        "name": "Lakshmi",
        "email": "lakshmi@example.org",
        "message": "Which courses lead to nursing?",
    }))
    .unwrap();

    SubmitContactUseCase { repo: repo.clone() }
        .execute(&message)
        .await
        .unwrap();
    assert_eq!(*repo.inbox.lock().unwrap(), vec![message]);
}
