use axum::{Json, extract::State};

use careerpath_domain::contact::ContactMessage;

use crate::error::ApiError;
use crate::handlers::StatusResponse;
use crate::state::AppState;
use crate::usecase::contact::SubmitContactUseCase;

// ── POST /api/contact ────────────────────────────────────────────────────────

/// A malformed email is rejected by the `Json` extractor with 422.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<ContactMessage>,
) -> Result<Json<StatusResponse>, ApiError> {
    let usecase = SubmitContactUseCase {
        repo: state.contact_repo(),
    };
    usecase.execute(&body).await?;
    Ok(Json(StatusResponse::new("received")))
}
