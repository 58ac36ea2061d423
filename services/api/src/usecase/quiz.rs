use careerpath_domain::quiz::{TestHistory, TestQuestion, TestResult, TestSubmission};

use crate::domain::query::quiz_filter;
use crate::domain::repository::{CareerRepository, QuestionRepository, TestHistoryRepository};
use crate::domain::seed;
use crate::domain::types::QUIZ_LIMIT;
use crate::error::{ApiError, OrDegraded};
use crate::usecase::bootstrap::ensure_seeded;

// ── GetQuestions ─────────────────────────────────────────────────────────────

pub struct GetQuestionsUseCase<R: QuestionRepository> {
    pub repo: R,
}

impl<R: QuestionRepository> GetQuestionsUseCase<R> {
    /// Questions by ascending step. Without a store only the first step is
    /// served.
    pub async fn execute(&self) -> Result<Vec<TestQuestion>, ApiError> {
        let listed = async {
            ensure_seeded(&self.repo, seed::questions).await?;
            self.repo.list_by_step().await
        };
        listed
            .await
            .or_degraded(|| vec![seed::fallback_question()])
    }
}

// ── SubmitTest ───────────────────────────────────────────────────────────────

pub struct SubmitTestUseCase<C: CareerRepository, H: TestHistoryRepository> {
    pub careers: C,
    pub history: H,
}

impl<C: CareerRepository, H: TestHistoryRepository> SubmitTestUseCase<C, H> {
    pub async fn execute(&self, submission: TestSubmission) -> Result<TestResult, ApiError> {
        let filter = quiz_filter(&submission.answers);
        let recommended = async {
            let careers = self.careers.find(&filter, QUIZ_LIMIT).await?;
            let ids: Vec<String> = careers.into_iter().map(|c| c.id.0).collect();
            self.history
                .insert(&TestHistory::new(&submission, ids.clone()))
                .await?;
            Ok::<_, ApiError>(ids)
        };
        let recommended_ids = recommended.await.or_degraded(Vec::new)?;

        Ok(TestResult {
            user_id: submission.user_id,
            recommended_ids,
        })
    }
}
