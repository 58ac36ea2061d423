use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use careerpath_domain::career::{Career, JobType};
use careerpath_domain::id::Stored;

use crate::domain::query::catalog_filter;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::catalog::{GetCareerUseCase, ListCareersUseCase};

// ── Response types ───────────────────────────────────────────────────────────

/// Catalog card: a career without skills, tags and growth paths.
#[derive(Debug, Serialize)]
pub struct CareerSummary {
    pub id: String,
    pub icon: String,
    pub name_en: String,
    pub name_te: String,
    pub short_desc_en: String,
    pub short_desc_te: String,
    pub salary_min: u32,
    pub salary_max: u32,
    pub education: String,
    pub job_type: JobType,
    pub field: String,
}

impl From<Stored<Career>> for CareerSummary {
    fn from(stored: Stored<Career>) -> Self {
        let Stored { id, record } = stored;
        Self {
            id: id.0,
            icon: record.icon,
            name_en: record.name_en,
            name_te: record.name_te,
            short_desc_en: record.short_desc_en,
            short_desc_te: record.short_desc_te,
            salary_min: record.salary_min,
            salary_max: record.salary_max,
            education: record.education,
            job_type: record.job_type,
            field: record.field,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct CareerListQuery {
    pub q: Option<String>,
    pub field: Option<String>,
    pub edu: Option<String>,
}

// ── GET /api/careers ─────────────────────────────────────────────────────────

pub async fn list_careers(
    State(state): State<AppState>,
    Query(query): Query<CareerListQuery>,
) -> Result<Json<Vec<CareerSummary>>, ApiError> {
    let filter = catalog_filter(
        query.q.as_deref(),
        query.field.as_deref(),
        query.edu.as_deref(),
    );
    let usecase = ListCareersUseCase {
        repo: state.career_repo(),
    };
    let careers = usecase.execute(&filter).await?;
    Ok(Json(careers.into_iter().map(CareerSummary::from).collect()))
}

// ── GET /api/careers/{id} ────────────────────────────────────────────────────

pub async fn get_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Stored<Career>>, ApiError> {
    let usecase = GetCareerUseCase {
        repo: state.career_repo(),
    };
    Ok(Json(usecase.execute(&id).await?))
}
