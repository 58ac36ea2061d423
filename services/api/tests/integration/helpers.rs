use std::sync::{Arc, Mutex};

use careerpath_api::domain::repository::{
    CareerRepository, ContactRepository, CounselorRepository, QuestionRepository,
    SavedCareerRepository, SeededRepository, TestHistoryRepository,
};
use careerpath_api::domain::types::CareerFilter;
use careerpath_api::error::ApiError;
use careerpath_domain::career::Career;
use careerpath_domain::contact::ContactMessage;
use careerpath_domain::counselor::Counselor;
use careerpath_domain::id::Stored;
use careerpath_domain::quiz::{TestHistory, TestQuestion};
use careerpath_domain::saved::SavedCareer;

/// Ids shaped like store ids: 24 lowercase hex digits.
fn next_id(len: usize) -> String {
    format!("{:024x}", len + 1)
}

fn check_id(id: &str) -> Result<(), ApiError> {
    if id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(ApiError::InvalidId)
    }
}

// ── InMemoryCareerRepo ───────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryCareerRepo {
    pub careers: Arc<Mutex<Vec<Stored<Career>>>>,
}

impl InMemoryCareerRepo {
    pub fn with(careers: Vec<Career>) -> Self {
        let repo = Self::default();
        repo.push_all(&careers);
        repo
    }

    fn push_all(&self, records: &[Career]) {
        let mut careers = self.careers.lock().unwrap();
        for record in records {
            let id = next_id(careers.len());
            careers.push(Stored::new(id, record.clone()));
        }
    }

    pub fn len(&self) -> usize {
        self.careers.lock().unwrap().len()
    }
}

impl SeededRepository for InMemoryCareerRepo {
    type Record = Career;

    fn collection_name(&self) -> &'static str {
        "career"
    }

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.len() as u64)
    }

    async fn insert_many(&self, records: &[Career]) -> Result<(), ApiError> {
        self.push_all(records);
        Ok(())
    }
}

impl CareerRepository for InMemoryCareerRepo {
    async fn find(
        &self,
        filter: &CareerFilter,
        limit: i64,
    ) -> Result<Vec<Stored<Career>>, ApiError> {
        Ok(self
            .careers
            .lock()
            .unwrap()
            .iter()
            .filter(|c| filter.matches(&c.record))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Stored<Career>>, ApiError> {
        check_id(id)?;
        Ok(self
            .careers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id.as_str() == id)
            .cloned())
    }
}

// ── InMemorySavedCareerRepo ──────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemorySavedCareerRepo {
    pub saved: Arc<Mutex<Vec<Stored<SavedCareer>>>>,
}

impl SavedCareerRepository for InMemorySavedCareerRepo {
    async fn find_pair(
        &self,
        user_id: &str,
        career_id: &str,
    ) -> Result<Option<Stored<SavedCareer>>, ApiError> {
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.record.user_id == user_id && s.record.career_id == career_id)
            .cloned())
    }

    async fn insert(&self, saved: &SavedCareer) -> Result<String, ApiError> {
        let mut records = self.saved.lock().unwrap();
        let id = next_id(records.len());
        records.push(Stored::new(id.clone(), saved.clone()));
        Ok(id)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Stored<SavedCareer>>, ApiError> {
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.record.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, user_id: &str, saved_id: &str) -> Result<bool, ApiError> {
        check_id(saved_id)?;
        let mut records = self.saved.lock().unwrap();
        let before = records.len();
        records.retain(|s| !(s.id.as_str() == saved_id && s.record.user_id == user_id));
        Ok(records.len() < before)
    }
}

// ── InMemoryQuestionRepo ─────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryQuestionRepo {
    pub questions: Arc<Mutex<Vec<TestQuestion>>>,
}

impl SeededRepository for InMemoryQuestionRepo {
    type Record = TestQuestion;

    fn collection_name(&self) -> &'static str {
        "testquestion"
    }

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.questions.lock().unwrap().len() as u64)
    }

    async fn insert_many(&self, records: &[TestQuestion]) -> Result<(), ApiError> {
        self.questions.lock().unwrap().extend_from_slice(records);
        Ok(())
    }
}

impl QuestionRepository for InMemoryQuestionRepo {
    async fn list_by_step(&self) -> Result<Vec<TestQuestion>, ApiError> {
        let mut questions = self.questions.lock().unwrap().clone();
        questions.sort_by_key(|q| q.step);
        Ok(questions)
    }
}

// ── InMemoryCounselorRepo ────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryCounselorRepo {
    pub counselors: Arc<Mutex<Vec<Stored<Counselor>>>>,
}

impl SeededRepository for InMemoryCounselorRepo {
    type Record = Counselor;

    fn collection_name(&self) -> &'static str {
        "counselor"
    }

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.counselors.lock().unwrap().len() as u64)
    }

    async fn insert_many(&self, records: &[Counselor]) -> Result<(), ApiError> {
        let mut counselors = self.counselors.lock().unwrap();
        for record in records {
            let id = next_id(counselors.len());
            counselors.push(Stored::new(id, record.clone()));
        }
        Ok(())
    }
}

impl CounselorRepository for InMemoryCounselorRepo {
    async fn list(&self, limit: i64) -> Result<Vec<Stored<Counselor>>, ApiError> {
        Ok(self
            .counselors
            .lock()
            .unwrap()
            .iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }
}

// ── Write-only logs ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryHistoryRepo {
    pub entries: Arc<Mutex<Vec<TestHistory>>>,
}

impl TestHistoryRepository for InMemoryHistoryRepo {
    async fn insert(&self, history: &TestHistory) -> Result<(), ApiError> {
        self.entries.lock().unwrap().push(history.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryContactRepo {
    pub inbox: Arc<Mutex<Vec<ContactMessage>>>,
}

impl ContactRepository for InMemoryContactRepo {
    async fn insert(&self, message: &ContactMessage) -> Result<(), ApiError> {
        self.inbox.lock().unwrap().push(message.clone());
        Ok(())
    }
}

pub fn answers(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}
