use crate::config::StoreEnvFlags;
use crate::infra::db::{
    MongoCareerRepository, MongoContactRepository, MongoCounselorRepository,
    MongoQuestionRepository, MongoSavedCareerRepository, MongoTestHistoryRepository, Store,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Store,
    pub store_env: StoreEnvFlags,
}

impl AppState {
    pub fn career_repo(&self) -> MongoCareerRepository {
        MongoCareerRepository {
            store: self.store.clone(),
        }
    }

    pub fn saved_career_repo(&self) -> MongoSavedCareerRepository {
        MongoSavedCareerRepository {
            store: self.store.clone(),
        }
    }

    pub fn question_repo(&self) -> MongoQuestionRepository {
        MongoQuestionRepository {
            store: self.store.clone(),
        }
    }

    pub fn counselor_repo(&self) -> MongoCounselorRepository {
        MongoCounselorRepository {
            store: self.store.clone(),
        }
    }

    pub fn test_history_repo(&self) -> MongoTestHistoryRepository {
        MongoTestHistoryRepository {
            store: self.store.clone(),
        }
    }

    pub fn contact_repo(&self) -> MongoContactRepository {
        MongoContactRepository {
            store: self.store.clone(),
        }
    }
}
