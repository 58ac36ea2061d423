use careerpath_domain::career::Career;
use careerpath_domain::id::Stored;

use crate::domain::repository::CareerRepository;
use crate::domain::seed;
use crate::domain::types::{CATALOG_LIMIT, CareerFilter};
use crate::error::{ApiError, OrDegraded};
use crate::usecase::bootstrap::ensure_seeded;

// ── ListCareers ──────────────────────────────────────────────────────────────

pub struct ListCareersUseCase<R: CareerRepository> {
    pub repo: R,
}

impl<R: CareerRepository> ListCareersUseCase<R> {
    /// Empty list when no store is configured.
    pub async fn execute(&self, filter: &CareerFilter) -> Result<Vec<Stored<Career>>, ApiError> {
        let listed = async {
            ensure_seeded(&self.repo, seed::careers).await?;
            self.repo.find(filter, CATALOG_LIMIT).await
        };
        listed.await.or_degraded(Vec::new)
    }
}

// ── GetCareer ────────────────────────────────────────────────────────────────

pub struct GetCareerUseCase<R: CareerRepository> {
    pub repo: R,
}

impl<R: CareerRepository> GetCareerUseCase<R> {
    pub async fn execute(&self, id: &str) -> Result<Stored<Career>, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::CareerNotFound)
    }
}
