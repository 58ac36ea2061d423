use tracing::info;

use crate::domain::repository::{
    CareerRepository, CounselorRepository, QuestionRepository, SeededRepository,
};
use crate::domain::seed;
use crate::error::ApiError;

/// Insert `seeds` into `repo` if it is empty. Returns `true` when seeded.
///
/// No guard against concurrent callers: two first accesses racing past the
/// count may both insert. The records are built before counting so the
/// count is immediately followed by the insert.
pub async fn ensure_seeded<R: SeededRepository>(
    repo: &R,
    seeds: impl FnOnce() -> Vec<R::Record>,
) -> Result<bool, ApiError> {
    let records = seeds();
    if repo.count().await? > 0 {
        return Ok(false);
    }
    repo.insert_many(&records).await?;
    info!(
        collection = repo.collection_name(),
        count = records.len(),
        "seeded empty collection"
    );
    Ok(true)
}

// ── Bootstrap (startup) ──────────────────────────────────────────────────────

/// Which collections were seeded by a bootstrap run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub careers: bool,
    pub questions: bool,
    pub counselors: bool,
}

pub struct BootstrapUseCase<C, Q, S>
where
    C: CareerRepository,
    Q: QuestionRepository,
    S: CounselorRepository,
{
    pub careers: C,
    pub questions: Q,
    pub counselors: S,
}

impl<C, Q, S> BootstrapUseCase<C, Q, S>
where
    C: CareerRepository,
    Q: QuestionRepository,
    S: CounselorRepository,
{
    pub async fn execute(&self) -> Result<BootstrapReport, ApiError> {
        Ok(BootstrapReport {
            careers: ensure_seeded(&self.careers, seed::careers).await?,
            questions: ensure_seeded(&self.questions, seed::questions).await?,
            counselors: ensure_seeded(&self.counselors, seed::counselors).await?,
        })
    }
}
