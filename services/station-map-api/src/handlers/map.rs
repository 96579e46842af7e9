//! Render handlers.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::Response,
};
use map_layers::ProjectToggle;
use serde::{Deserialize, Serialize};
use station_common::ErrorReport;
use uuid::Uuid;

use super::with_session_json;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MapParams {
    /// Overrides the configured legend default
    pub legend: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectToggle>,
    pub errors: Vec<ErrorReport>,
}

/// GET /api/sessions/:session_id/projects - Project checkboxes
pub async fn projects_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Response {
    with_session_json(&state, session_id, |session| {
        let (projects, errors) = session.projects();
        ProjectsResponse { projects, errors }
    })
    .await
}

/// GET /api/sessions/:session_id/map - Layers, legend and view
pub async fn map_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Query(params): Query<MapParams>,
) -> Response {
    with_session_json(&state, session_id, move |session| {
        session.render(params.legend)
    })
    .await
}
