pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::flows::document::MAX_UPLOAD_BYTES;
use crate::flows::handlers;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analyzer
        .route("/api/v1/resume/analyze", post(handlers::handle_analyze_resume))
        .route(
            "/api/v1/resume/analyze/upload",
            post(handlers::handle_analyze_resume_upload).layer(DefaultBodyLimit::max(
                MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES,
            )),
        )
        // Mock interview
        .route(
            "/api/v1/interview/feedback",
            post(handlers::handle_interview_feedback),
        )
        // Job listings
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .with_state(state)
}
