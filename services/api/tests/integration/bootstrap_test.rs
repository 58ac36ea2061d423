use careerpath_api::domain::seed;
use careerpath_api::usecase::bootstrap::{BootstrapReport, BootstrapUseCase, ensure_seeded};
use careerpath_testing::careers::sample_catalog;

use crate::helpers::{InMemoryCareerRepo, InMemoryCounselorRepo, InMemoryQuestionRepo};

#[tokio::test]
async fn should_seed_every_collection_once() {
    let uc = BootstrapUseCase {
        careers: InMemoryCareerRepo::default(),
        questions: InMemoryQuestionRepo::default(),
        counselors: InMemoryCounselorRepo::default(),
    };

    let first = uc.execute().await.unwrap();
    assert_eq!(
        first,
        BootstrapReport {
            careers: true,
            questions: true,
            counselors: true,
        }
    );

    let second = uc.execute().await.unwrap();
    assert_eq!(second, BootstrapReport::default());

    assert_eq!(uc.careers.len(), 3, "bootstrap twice must leave 3 careers");
    assert_eq!(uc.questions.questions.lock().unwrap().len(), 5);
    assert_eq!(uc.counselors.counselors.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn should_not_seed_over_existing_catalog() {
    let repo = InMemoryCareerRepo::with(sample_catalog());
    let seeded = ensure_seeded(&repo, seed::careers).await.unwrap();
    assert!(!seeded);
    assert_eq!(repo.len(), sample_catalog().len());
}
