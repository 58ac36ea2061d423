use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;
use crate::usecase::diagnostics::{DiagnoseStoreUseCase, StoreDiagnostics, StoreHealth};

// ── GET /test ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

fn set_or_not(set: bool) -> &'static str {
    if set { "Set" } else { "Not Set" }
}

impl From<StoreDiagnostics> for DiagnosticsResponse {
    fn from(report: StoreDiagnostics) -> Self {
        let database = match report.health {
            StoreHealth::NotAvailable => "Not Available".to_owned(),
            StoreHealth::Working => "Connected & Working".to_owned(),
            StoreHealth::Failing(detail) => format!("Connected but Error: {detail}"),
        };
        Self {
            backend: "Running",
            database,
            database_url: set_or_not(report.env.database_url_set),
            database_name: set_or_not(report.env.database_name_set),
            connection_status: if report.connected {
                "Connected"
            } else {
                "Not Connected"
            },
            collections: report.collections,
        }
    }
}

pub async fn diagnose_store(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let usecase = DiagnoseStoreUseCase {
        probe: state.store,
        env: state.store_env,
    };
    Json(usecase.execute().await.into())
}
