pub mod emails;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Largest accepted request body (résumé uploads included).
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(emails::handle_index))
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/emails/generate",
            post(emails::handle_generate_email),
        )
        .route("/api/v1/jobs/extract", post(emails::handle_extract_job))
        .route(
            "/api/v1/resumes/extract",
            post(emails::handle_extract_resume),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
