use careerpath_api::domain::query::catalog_filter;
use careerpath_api::domain::types::{CATALOG_LIMIT, CareerFilter};
use careerpath_api::error::ApiError;
use careerpath_api::usecase::catalog::{GetCareerUseCase, ListCareersUseCase};
use careerpath_testing::careers::{CareerBuilder, sample_catalog};

use crate::helpers::InMemoryCareerRepo;

#[tokio::test]
async fn should_cap_catalog_results() {
    let many = (0..75)
        .map(|i| CareerBuilder::new(&format!("Career {i}")).build())
        .collect();
    let uc = ListCareersUseCase {
        repo: InMemoryCareerRepo::with(many),
    };
    let careers = uc.execute(&CareerFilter::All).await.unwrap();
    assert_eq!(careers.len(), CATALOG_LIMIT as usize);
    assert_eq!(careers[0].record.name_en, "Career 0");
}

#[tokio::test]
async fn should_return_only_records_satisfying_every_parameter() {
    let uc = ListCareersUseCase {
        repo: InMemoryCareerRepo::with(sample_catalog()),
    };
    let filter = catalog_filter(Some("e"), Some("Trades"), Some("iti"));
    let careers = uc.execute(&filter).await.unwrap();

    assert_eq!(careers.len(), 1);
    let plumber = &careers[0].record;
    assert_eq!(plumber.name_en, "Plumber");
    assert_eq!(plumber.field, "Trades");
    assert!(plumber.education.to_lowercase().contains("iti"));
}

#[tokio::test]
async fn should_match_query_in_telugu_name() {
    let uc = ListCareersUseCase {
        repo: InMemoryCareerRepo::with(sample_catalog()),
    };
    let careers = uc
        .execute(&catalog_filter(Some("ఆరోగ్య"), None, None))
        .await
        .unwrap();
    assert_eq!(careers.len(), 1);
    assert_eq!(careers[0].record.name_en, "Village Health Worker");
}

#[tokio::test]
async fn should_treat_query_metacharacters_literally() {
    let uc = ListCareersUseCase {
        repo: InMemoryCareerRepo::with(sample_catalog()),
    };
    let careers = uc
        .execute(&catalog_filter(Some(".*"), None, None))
        .await
        .unwrap();
    assert!(careers.is_empty());
}

#[tokio::test]
async fn should_expose_non_empty_ids() {
    let uc = ListCareersUseCase {
        repo: InMemoryCareerRepo::default(),
    };
    let careers = uc.execute(&CareerFilter::All).await.unwrap();
    assert_eq!(careers.len(), 3);
    for career in &careers {
        assert!(!career.id.as_str().is_empty());
        let json = serde_json::to_value(career).unwrap();
        assert!(json.get("_id").is_none());
        assert_eq!(json["id"], career.id.as_str());
    }
}

#[tokio::test]
async fn should_find_listed_career_by_id() {
    let repo = InMemoryCareerRepo::with(sample_catalog());
    let listed = ListCareersUseCase { repo: repo.clone() }
        .execute(&catalog_filter(None, Some("Engineering"), None))
        .await
        .unwrap();

    let detail = GetCareerUseCase { repo }
        .execute(listed[0].id.as_str())
        .await
        .unwrap();
    assert_eq!(detail, listed[0]);
    assert_eq!(detail.record.tags, vec!["logic", "computers"]);
}

#[tokio::test]
async fn should_distinguish_malformed_and_unknown_ids() {
    let uc = GetCareerUseCase {
        repo: InMemoryCareerRepo::with(sample_catalog()),
    };

    let malformed = uc.execute("abc").await;
    assert!(
        matches!(malformed, Err(ApiError::InvalidId)),
        "expected InvalidId, got {malformed:?}"
    );

    let unknown = uc.execute("ffffffffffffffffffffffff").await;
    assert!(
        matches!(unknown, Err(ApiError::CareerNotFound)),
        "expected CareerNotFound, got {unknown:?}"
    );
}
