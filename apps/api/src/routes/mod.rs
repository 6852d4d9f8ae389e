pub mod health;
pub mod meta;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/meta", get(meta::meta_handler))
        // Session API
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", get(handlers::handle_get_form))
        .route(
            "/api/v1/sessions/:id/resume",
            post(handlers::handle_upload_resume),
        )
        .route(
            "/api/v1/sessions/:id/job",
            put(handlers::handle_set_job_description),
        )
        .route(
            "/api/v1/sessions/:id/analyze",
            post(handlers::handle_analyze),
        )
        .route("/api/v1/sessions/:id/reset", post(handlers::handle_reset))
        // Resumes arrive whole in one multipart request; no size cap.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
