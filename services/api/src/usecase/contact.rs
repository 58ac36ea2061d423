use careerpath_domain::contact::ContactMessage;

use crate::domain::repository::ContactRepository;
use crate::error::{ApiError, OrDegraded};

pub struct SubmitContactUseCase<R: ContactRepository> {
    pub repo: R,
}

impl<R: ContactRepository> SubmitContactUseCase<R> {
    /// Stores the message if a store is configured; otherwise drops it.
    pub async fn execute(&self, message: &ContactMessage) -> Result<(), ApiError> {
        self.repo.insert(message).await.or_degraded(|| {
            tracing::warn!("contact message dropped, no store configured");
        })
    }
}
