//! Selection handlers. Each answers with the render for the new selection.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::Response,
};
use station_common::ProjectId;
use tracing::debug;
use uuid::Uuid;

use super::with_session_json;
use crate::state::AppState;

/// POST /api/sessions/:session_id/selection/all
pub async fn select_all_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Response {
    with_session_json(&state, session_id, |session| {
        session.select_all();
        session.render(None)
    })
    .await
}

/// POST /api/sessions/:session_id/selection/none
pub async fn select_none_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Response {
    with_session_json(&state, session_id, |session| {
        session.clear_selection();
        session.render(None)
    })
    .await
}

/// PUT /api/sessions/:session_id/selection/:project
pub async fn add_project_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((session_id, project)): Path<(Uuid, String)>,
) -> Response {
    with_session_json(&state, session_id, move |session| {
        let added = session.add_project(ProjectId::new(project.as_str()));
        debug!(session_id = %session_id, project = %project, added, "Project selected");
        session.render(None)
    })
    .await
}

/// DELETE /api/sessions/:session_id/selection/:project
pub async fn remove_project_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((session_id, project)): Path<(Uuid, String)>,
) -> Response {
    with_session_json(&state, session_id, move |session| {
        let removed = session.remove_project(&ProjectId::new(project.as_str()));
        debug!(session_id = %session_id, project = %project, removed, "Project deselected");
        session.render(None)
    })
    .await
}
