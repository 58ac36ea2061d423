use axum::{Json, extract::State};

use careerpath_domain::counselor::Counselor;
use careerpath_domain::id::Stored;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::counselor::ListCounselorsUseCase;

// ── GET /api/counselors ──────────────────────────────────────────────────────

pub async fn list_counselors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Stored<Counselor>>>, ApiError> {
    let usecase = ListCounselorsUseCase {
        repo: state.counselor_repo(),
    };
    Ok(Json(usecase.execute().await?))
}
