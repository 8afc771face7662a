pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::interview::handlers as interview;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Largest accepted resume upload.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/v1/resume/extract",
            post(resume::handle_extract_resume).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        // Interview API
        .route(
            "/api/v1/interview/questions",
            post(interview::handle_generate_questions),
        )
        .route("/api/v1/interview/analysis", post(interview::handle_analyze))
        .with_state(state)
}
