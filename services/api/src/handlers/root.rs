use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use careerpath_core::health::readiness;

use crate::state::AppState;
use crate::usecase::diagnostics::CheckReadinessUseCase;

// ── GET / ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "CareerPath API running",
    })
}

// ── GET /readyz ──────────────────────────────────────────────────────────────

pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    let usecase = CheckReadinessUseCase { probe: state.store };
    readiness(usecase.execute().await)
}
