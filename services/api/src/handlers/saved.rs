use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use careerpath_domain::id::Stored;
use careerpath_domain::saved::{SaveOutcome, SavedCareer};

use crate::error::ApiError;
use crate::handlers::StatusResponse;
use crate::state::AppState;
use crate::usecase::saved::{
    DeleteSavedCareerUseCase, ListSavedCareersUseCase, SaveCareerUseCase,
};

// ── POST /api/save ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl From<SaveOutcome> for SaveResponse {
    fn from(outcome: SaveOutcome) -> Self {
        match outcome {
            SaveOutcome::Created { id } => Self {
                status: "ok",
                id: Some(id),
            },
            SaveOutcome::AlreadyExists => Self {
                status: "exists",
                id: None,
            },
        }
    }
}

pub async fn save_career(
    State(state): State<AppState>,
    Json(body): Json<SavedCareer>,
) -> Result<(StatusCode, Json<SaveResponse>), ApiError> {
    let usecase = SaveCareerUseCase {
        repo: state.saved_career_repo(),
    };
    let outcome = usecase.execute(body).await?;
    Ok((StatusCode::CREATED, Json(outcome.into())))
}

// ── GET /api/saved/{user_id} ─────────────────────────────────────────────────

pub async fn list_saved(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Stored<SavedCareer>>>, ApiError> {
    let usecase = ListSavedCareersUseCase {
        repo: state.saved_career_repo(),
    };
    Ok(Json(usecase.execute(&user_id).await?))
}

// ── DELETE /api/saved/{user_id}/{saved_id} ───────────────────────────────────

pub async fn delete_saved(
    State(state): State<AppState>,
    Path((user_id, saved_id)): Path<(String, String)>,
) -> Result<Json<StatusResponse>, ApiError> {
    let usecase = DeleteSavedCareerUseCase {
        repo: state.saved_career_repo(),
    };
    usecase.execute(&user_id, &saved_id).await?;
    Ok(Json(StatusResponse::new("deleted")))
}
