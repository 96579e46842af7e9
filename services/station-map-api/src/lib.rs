//! Station map HTTP service.
//!
//! Each browser session gets its own selection and memoized source load.
//! Every selection change answers with a fresh render so the client can
//! redraw layers, legend and project checkboxes in one step.

pub mod config;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Extension, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

use crate::state::AppState;

/// Build the API router. Tracing is layered on by the binary.
pub fn router(state: Arc<AppState>, prometheus: PrometheusHandle) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Sessions
        .route("/api/sessions", post(handlers::sessions::create_session_handler))
        .route(
            "/api/sessions/:session_id",
            delete(handlers::sessions::end_session_handler),
        )
        .route(
            "/api/sessions/:session_id/reload",
            post(handlers::sessions::reload_handler),
        )
        // Render
        .route(
            "/api/sessions/:session_id/projects",
            get(handlers::map::projects_handler),
        )
        .route(
            "/api/sessions/:session_id/map",
            get(handlers::map::map_handler),
        )
        // Selection
        .route(
            "/api/sessions/:session_id/selection/all",
            post(handlers::selection::select_all_handler),
        )
        .route(
            "/api/sessions/:session_id/selection/none",
            post(handlers::selection::select_none_handler),
        )
        .route(
            "/api/sessions/:session_id/selection/:project",
            put(handlers::selection::add_project_handler)
                .delete(handlers::selection::remove_project_handler),
        )
        .layer(Extension(state))
        .layer(Extension(prometheus))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
