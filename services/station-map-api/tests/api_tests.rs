//! In-process tests for the HTTP surface.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use station_map_api::config::AppConfig;
use station_map_api::router;
use station_map_api::state::AppState;
use test_utils::{fixtures, write_temp_source};

struct TestApp {
    _dir: TempDir,
    path: PathBuf,
    state: Arc<AppState>,
    router: Router,
}

/// The recorder is process-global, so every test shares one handle.
fn prometheus() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("Failed to install Prometheus recorder")
        })
        .clone()
}

fn app_with_source(content: &str) -> TestApp {
    let (dir, path) = write_temp_source("stations.csv", content);
    let mut config = AppConfig::default();
    config.source.path = path.clone();

    let state = Arc::new(AppState::new(config));
    TestApp {
        _dir: dir,
        path,
        router: router(Arc::clone(&state), prometheus()),
        state,
    }
}

async fn send(app: &TestApp, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() || !bytes.starts_with(b"{") {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn create_session(app: &TestApp) -> (String, Value) {
    let (status, body) = send(app, Method::POST, "/api/sessions").await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["session_id"].as_str().unwrap().to_string();
    (id, body)
}

fn layer_ids(render: &Value) -> Vec<&str> {
    render["layers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|layer| layer["project_id"].as_str().unwrap())
        .collect()
}

// ============================================================================
// Health and sessions
// ============================================================================

#[tokio::test]
async fn test_health() {
    let app = app_with_source(fixtures::TWO_PROJECTS);
    let (status, body) = send(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_metrics_exposes_pipeline_counters() {
    let app = app_with_source(fixtures::COASTAL);
    let (id, _) = create_session(&app).await;
    send(&app, Method::GET, &format!("/api/sessions/{}/map", id)).await;

    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    for name in [
        "station_sessions_created_total",
        "station_sessions_active",
        "station_loads_total",
        "station_rows_dropped_total",
        "station_load_cache_hits_total",
        "station_renders_total",
        "station_render_layers",
    ] {
        assert!(text.contains(name), "missing {} in:\n{}", name, text);
    }
}

#[tokio::test]
async fn test_create_session_renders_every_project() {
    let app = app_with_source(fixtures::COASTAL);
    let (_, body) = create_session(&app).await;

    assert_eq!(
        layer_ids(&body),
        vec!["Benguela Upwelling", "Algoa Bay", "KZN Bight"]
    );
    assert_eq!(body["legend"]["entries"].as_array().unwrap().len(), 3);
    assert_eq!(body["dropped_rows"], 2);
    assert_eq!(body["view"]["layer_control"], true);
    assert_eq!(app.state.session_count().await, 1);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let app = app_with_source(fixtures::TWO_PROJECTS);
    let uri = "/api/sessions/00000000-0000-4000-8000-000000000000/map";
    let (status, body) = send(&app, Method::GET, uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Session not found"));
}

#[tokio::test]
async fn test_end_session() {
    let app = app_with_source(fixtures::TWO_PROJECTS);
    let (id, _) = create_session(&app).await;

    let uri = format!("/api/sessions/{}", id);
    let (status, _) = send(&app, Method::DELETE, &uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::DELETE, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.state.session_count().await, 0);
}

// ============================================================================
// Selection
// ============================================================================

#[tokio::test]
async fn test_clear_then_add_project_with_space_in_name() {
    let app = app_with_source(fixtures::COASTAL);
    let (id, _) = create_session(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/sessions/{}/selection/none", id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["layers"].as_array().unwrap().is_empty());
    assert_eq!(body["legend"], Value::Null);
    assert_eq!(body["view"]["layer_control"], false);
    assert_eq!(body["view"]["basemap"], "OpenStreetMap");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/sessions/{}/selection/Algoa%20Bay", id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(layer_ids(&body), vec!["Algoa Bay"]);
    assert_eq!(body["layers"][0]["color"], "red");
    assert_eq!(body["layers"][0]["name"], "Algoa Bay Layer");
}

#[tokio::test]
async fn test_remove_project_and_select_all() {
    let app = app_with_source(fixtures::COASTAL);
    let (id, _) = create_session(&app).await;

    let (_, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/sessions/{}/selection/KZN%20Bight", id),
    )
    .await;
    assert_eq!(layer_ids(&body), vec!["Benguela Upwelling", "Algoa Bay"]);

    let (_, body) = send(
        &app,
        Method::POST,
        &format!("/api/sessions/{}/selection/all", id),
    )
    .await;
    assert_eq!(body["layers"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_projects_lists_toggles() {
    let app = app_with_source(fixtures::COASTAL);
    let (id, _) = create_session(&app).await;
    send(
        &app,
        Method::DELETE,
        &format!("/api/sessions/{}/selection/Algoa%20Bay", id),
    )
    .await;

    let (status, body) = send(&app, Method::GET, &format!("/api/sessions/{}/projects", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["projects"],
        json!([
            { "project_id": "Benguela Upwelling", "color": "blue", "selected": true },
            { "project_id": "Algoa Bay", "color": "red", "selected": false },
            { "project_id": "KZN Bight", "color": "green", "selected": true }
        ])
    );
    assert_eq!(body["errors"], json!([]));
}

#[tokio::test]
async fn test_sessions_do_not_share_selection() {
    let app = app_with_source(fixtures::TWO_PROJECTS);
    let (first, _) = create_session(&app).await;
    let (second, _) = create_session(&app).await;

    send(
        &app,
        Method::POST,
        &format!("/api/sessions/{}/selection/none", first),
    )
    .await;

    let (_, body) = send(&app, Method::GET, &format!("/api/sessions/{}/map", second)).await;
    assert_eq!(layer_ids(&body), vec!["P1", "P2"]);
}

// ============================================================================
// Rendering and reload
// ============================================================================

#[tokio::test]
async fn test_map_legend_query() {
    let app = app_with_source(fixtures::TWO_PROJECTS);
    let (id, _) = create_session(&app).await;

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/api/sessions/{}/map?legend=false", id),
    )
    .await;
    assert_eq!(body["legend"], Value::Null);
    assert_eq!(body["layers"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, Method::GET, &format!("/api/sessions/{}/map", id)).await;
    assert_eq!(body["legend"]["title"], "Projects");
}

#[tokio::test]
async fn test_load_error_is_reported_not_raised() {
    let app = app_with_source(fixtures::MISSING_LONGITUDE);
    let (_, body) = create_session(&app).await;

    assert!(body["layers"].as_array().unwrap().is_empty());
    assert_eq!(body["errors"][0]["kind"], "SchemaInvalid");
    assert!(body["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("longitude"));
}

#[tokio::test]
async fn test_reload_reads_updated_source() {
    let app = app_with_source(fixtures::TWO_PROJECTS);
    let (id, _) = create_session(&app).await;

    std::fs::write(&app.path, fixtures::COASTAL).unwrap();
    let (_, body) = send(&app, Method::GET, &format!("/api/sessions/{}/map", id)).await;
    assert_eq!(layer_ids(&body), vec!["P1", "P2"]);

    let (status, body) = send(&app, Method::POST, &format!("/api/sessions/{}/reload", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["layers"].as_array().unwrap().len(), 3);
}
