#![allow(async_fn_in_trait)]

use careerpath_domain::career::Career;
use careerpath_domain::contact::ContactMessage;
use careerpath_domain::counselor::Counselor;
use careerpath_domain::id::Stored;
use careerpath_domain::quiz::{TestHistory, TestQuestion};
use careerpath_domain::saved::SavedCareer;

use crate::domain::types::CareerFilter;
use crate::error::ApiError;

// Every method returns `ApiError::StoreUnavailable` when no store is
// configured, before touching anything.

/// A collection that is populated with default records when empty.
pub trait SeededRepository: Send + Sync {
    type Record;

    /// Name of the backing collection, for logs.
    fn collection_name(&self) -> &'static str;

    async fn count(&self) -> Result<u64, ApiError>;

    async fn insert_many(&self, records: &[Self::Record]) -> Result<(), ApiError>;
}

/// Repository for the career catalog.
pub trait CareerRepository: SeededRepository<Record = Career> {
    /// Careers matching `filter`, in store order, at most `limit`.
    async fn find(
        &self,
        filter: &CareerFilter,
        limit: i64,
    ) -> Result<Vec<Stored<Career>>, ApiError>;

    /// `ApiError::InvalidId` when `id` is not a well-formed store id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Stored<Career>>, ApiError>;
}

/// Repository for saved careers.
pub trait SavedCareerRepository: Send + Sync {
    async fn find_pair(
        &self,
        user_id: &str,
        career_id: &str,
    ) -> Result<Option<Stored<SavedCareer>>, ApiError>;

    /// Insert and return the new record id.
    async fn insert(&self, saved: &SavedCareer) -> Result<String, ApiError>;

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Stored<SavedCareer>>, ApiError>;

    /// Delete the record with `saved_id` owned by `user_id`. Returns `true`
    /// if a record was deleted.
    async fn delete(&self, user_id: &str, saved_id: &str) -> Result<bool, ApiError>;
}

/// Repository for quiz questions.
pub trait QuestionRepository: SeededRepository<Record = TestQuestion> {
    /// All questions ordered by ascending step.
    async fn list_by_step(&self) -> Result<Vec<TestQuestion>, ApiError>;
}

/// Repository for counselors.
pub trait CounselorRepository: SeededRepository<Record = Counselor> {
    async fn list(&self, limit: i64) -> Result<Vec<Stored<Counselor>>, ApiError>;
}

/// Write-only log of quiz submissions.
pub trait TestHistoryRepository: Send + Sync {
    async fn insert(&self, history: &TestHistory) -> Result<(), ApiError>;
}

/// Write-only inbox of contact messages.
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, message: &ContactMessage) -> Result<(), ApiError>;
}

/// Connectivity checks against the store.
pub trait StoreProbe: Send + Sync {
    fn is_configured(&self) -> bool;

    async fn ping(&self) -> Result<(), ApiError>;

    async fn collection_names(&self) -> Result<Vec<String>, ApiError>;
}
