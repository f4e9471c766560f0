//! HTTP Routes
//!
//! Router construction for the Chronos web application.

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::services::document::MAX_UPLOAD_BYTES;
use crate::state::AppState;

pub mod analysis;
pub mod settings;
pub mod upload;

/// Build the HTTP router for the application.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(upload::index))
        .route("/upload", post(upload::upload_file))
        .route(
            "/analyze/{id}",
            get(analysis::show_analysis).post(analysis::run_analysis),
        )
        .route(
            "/settings",
            get(settings::show_settings).post(settings::update_settings),
        )
        .route("/settings/health", post(settings::check_provider_health))
        // Health check
        .route("/health", get(health_check))
        // Upload cap, with slack for multipart framing; the document service
        // enforces the exact payload limit
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
