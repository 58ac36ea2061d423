use careerpath_domain::id::Stored;
use careerpath_domain::saved::{SaveOutcome, SavedCareer};

use crate::domain::repository::SavedCareerRepository;
use crate::error::{ApiError, OrDegraded};

// ── SaveCareer ───────────────────────────────────────────────────────────────

pub struct SaveCareerUseCase<R: SavedCareerRepository> {
    pub repo: R,
}

impl<R: SavedCareerRepository> SaveCareerUseCase<R> {
    pub async fn execute(&self, saved: SavedCareer) -> Result<SaveOutcome, ApiError> {
        if self
            .repo
            .find_pair(&saved.user_id, &saved.career_id)
            .await?
            .is_some()
        {
            return Ok(SaveOutcome::AlreadyExists);
        }
        let id = self.repo.insert(&saved).await?;
        Ok(SaveOutcome::Created { id })
    }
}

// ── ListSavedCareers ─────────────────────────────────────────────────────────

pub struct ListSavedCareersUseCase<R: SavedCareerRepository> {
    pub repo: R,
}

impl<R: SavedCareerRepository> ListSavedCareersUseCase<R> {
    pub async fn execute(&self, user_id: &str) -> Result<Vec<Stored<SavedCareer>>, ApiError> {
        self.repo.list_by_user(user_id).await.or_degraded(Vec::new)
    }
}

// ── DeleteSavedCareer ────────────────────────────────────────────────────────

pub struct DeleteSavedCareerUseCase<R: SavedCareerRepository> {
    pub repo: R,
}

impl<R: SavedCareerRepository> DeleteSavedCareerUseCase<R> {
    /// Succeeds whether or not a record matched.
    pub async fn execute(&self, user_id: &str, saved_id: &str) -> Result<(), ApiError> {
        let deleted = self.repo.delete(user_id, saved_id).await?;
        if !deleted {
            tracing::debug!(user_id, saved_id, "no saved career matched delete");
        }
        Ok(())
    }
}
