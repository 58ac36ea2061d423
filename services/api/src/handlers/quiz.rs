use axum::{Json, extract::State};

use careerpath_domain::quiz::{TestQuestion, TestResult, TestSubmission};

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::quiz::{GetQuestionsUseCase, SubmitTestUseCase};

// ── GET /api/test/questions ──────────────────────────────────────────────────

pub async fn get_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<TestQuestion>>, ApiError> {
    let usecase = GetQuestionsUseCase {
        repo: state.question_repo(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── POST /api/test/submit ────────────────────────────────────────────────────

pub async fn submit_test(
    State(state): State<AppState>,
    Json(body): Json<TestSubmission>,
) -> Result<Json<TestResult>, ApiError> {
    let usecase = SubmitTestUseCase {
        careers: state.career_repo(),
        history: state.test_history_repo(),
    };
    Ok(Json(usecase.execute(body).await?))
}
