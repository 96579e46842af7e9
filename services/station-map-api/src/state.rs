//! Application state: configuration plus the live sessions.

use std::collections::HashMap;
use std::sync::Arc;

use map_layers::{MapRender, SessionState};
use metrics::{counter, gauge};
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinError;
use tracing::info;
use uuid::Uuid;

use crate::config::AppConfig;

/// Failure to run an operation against a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(Uuid),

    #[error("Session task failed: {0}")]
    Task(#[from] JoinError),
}

/// Shared application state.
pub struct AppState {
    pub config: AppConfig,

    /// Live sessions. Each one owns its selection and load cache.
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<SessionState>>>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Start a session on the configured source and render its initial map.
    pub async fn create_session(&self) -> Result<(Uuid, MapRender), SessionError> {
        let source = self.config.station_source();
        let loader = self.config.source.loader.clone();
        let settings = self.config.render.clone();

        // The first render reads the source file
        let (session, render) = tokio::task::spawn_blocking(move || {
            let mut session = SessionState::new(source, loader, settings);
            let render = session.render(None);
            (session, render)
        })
        .await?;

        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;
        sessions.insert(id, Arc::new(Mutex::new(session)));

        counter!("station_sessions_created_total").increment(1);
        gauge!("station_sessions_active").set(sessions.len() as f64);
        info!(
            session_id = %id,
            sessions = sessions.len(),
            layers = render.layers.len(),
            errors = render.errors.len(),
            "Session created"
        );
        Ok((id, render))
    }

    /// Run `f` against one session on the blocking pool, since it may
    /// (re)read the source file.
    pub async fn with_session<R, F>(&self, id: Uuid, f: F) -> Result<R, SessionError>
    where
        F: FnOnce(&mut SessionState) -> R + Send + 'static,
        R: Send + 'static,
    {
        let session = self
            .sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound(id))?;

        let result = tokio::task::spawn_blocking(move || {
            let mut session = session.blocking_lock();
            f(&mut session)
        })
        .await?;
        Ok(result)
    }

    /// Returns whether the session existed.
    pub async fn end_session(&self, id: Uuid) -> bool {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(&id).is_some();
        if removed {
            gauge!("station_sessions_active").set(sessions.len() as f64);
            info!(session_id = %id, sessions = sessions.len(), "Session ended");
        }
        removed
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_session() {
        let state = AppState::new(AppConfig::default());
        let id = Uuid::new_v4();
        assert!(matches!(
            state.with_session(id, |_| ()).await,
            Err(SessionError::NotFound(missing)) if missing == id
        ));
        assert!(!state.end_session(Uuid::new_v4()).await);
    }

    #[tokio::test]
    async fn test_session_with_missing_source_still_created() {
        let mut config = AppConfig::default();
        config.source.path = "/nonexistent/stations.csv".into();
        let state = AppState::new(config);

        let (id, render) = state.create_session().await.unwrap();
        assert_eq!(render.errors.len(), 1);
        assert!(render.layers.is_empty());

        let selected = state.with_session(id, |s| s.selection().len()).await.unwrap();
        assert_eq!(selected, 0);
    }

    #[tokio::test]
    async fn test_session_work_runs_off_the_async_thread() {
        let mut config = AppConfig::default();
        config.source.path = "/nonexistent/stations.csv".into();
        let state = AppState::new(config);
        let (id, _) = state.create_session().await.unwrap();

        let caller = std::thread::current().id();
        let worker = state
            .with_session(id, |session| {
                session.reload();
                std::thread::current().id()
            })
            .await
            .unwrap();
        assert_ne!(caller, worker);
    }
}
