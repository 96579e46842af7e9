//! HTTP request handlers.

pub mod health;
pub mod map;
pub mod selection;
pub mod sessions;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use map_layers::SessionState;
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::state::{AppState, SessionError};

/// JSON error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let status = match &self {
            SessionError::NotFound(_) => StatusCode::NOT_FOUND,
            SessionError::Task(e) => {
                error!(error = %e, "Session task failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Apply `f` to a session and answer with its result as JSON.
pub(crate) async fn with_session_json<T, F>(state: &AppState, id: Uuid, f: F) -> Response
where
    T: Serialize + Send + 'static,
    F: FnOnce(&mut SessionState) -> T + Send + 'static,
{
    match state.with_session(id, f).await {
        Ok(body) => Json(body).into_response(),
        Err(e) => e.into_response(),
    }
}
