//! Session lifecycle handlers.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use map_layers::MapRender;
use serde::Serialize;
use uuid::Uuid;

use super::with_session_json;
use crate::state::{AppState, SessionError};

#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,

    #[serde(flatten)]
    pub render: MapRender,
}

/// POST /api/sessions - Start a session and return its first render
pub async fn create_session_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    match state.create_session().await {
        Ok((session_id, render)) => (
            StatusCode::CREATED,
            Json(SessionCreated { session_id, render }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// DELETE /api/sessions/:session_id - End a session
pub async fn end_session_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Response {
    if state.end_session(session_id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        SessionError::NotFound(session_id).into_response()
    }
}

/// POST /api/sessions/:session_id/reload - Re-read the source and render
pub async fn reload_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Response {
    with_session_json(&state, session_id, |session| {
        session.reload();
        session.render(None)
    })
    .await
}
