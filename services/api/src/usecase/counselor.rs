use careerpath_domain::counselor::Counselor;
use careerpath_domain::id::Stored;

use crate::domain::repository::CounselorRepository;
use crate::domain::seed;
use crate::domain::types::COUNSELOR_LIMIT;
use crate::error::{ApiError, OrDegraded};
use crate::usecase::bootstrap::ensure_seeded;

pub struct ListCounselorsUseCase<R: CounselorRepository> {
    pub repo: R,
}

impl<R: CounselorRepository> ListCounselorsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Stored<Counselor>>, ApiError> {
        let listed = async {
            ensure_seeded(&self.repo, seed::counselors).await?;
            self.repo.list(COUNSELOR_LIMIT).await
        };
        listed.await.or_degraded(Vec::new)
    }
}
