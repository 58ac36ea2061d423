use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use careerpath_core::health::healthz;
use careerpath_core::middleware::{cors_layer, propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    career::{get_career, list_careers},
    contact::submit_contact,
    counselor::list_counselors,
    diagnostics::diagnose_store,
    quiz::{get_questions, submit_test},
    root::{readyz, root},
    saved::{delete_saved, list_saved, save_career},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/test", get(diagnose_store))
        // Careers
        .route("/api/careers", get(list_careers))
        .route("/api/careers/{id}", get(get_career))
        // Saved careers
        .route("/api/save", post(save_career))
        .route("/api/saved/{user_id}", get(list_saved))
        .route("/api/saved/{user_id}/{saved_id}", delete(delete_saved))
        // Quiz
        .route("/api/test/questions", get(get_questions))
        .route("/api/test/submit", post(submit_test))
        // Counselors and contact
        .route("/api/counselors", get(list_counselors))
        .route("/api/contact", post(submit_contact))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .layer(cors_layer())
        .with_state(state)
}
