#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use http_body_util::BodyExt;
use roster_core::seed::FixedClock;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use roster_api::config::ServerConfig;
use roster_api::router::build_app_router;
use roster_api::service::SelectionService;
use roster_api::state::AppState;

/// Build a test `ServerConfig` reading inputs from `dir`.
pub fn test_config(dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        snapshot_path: dir.join("operators_data.json"),
        avatars_dir: dir.join("avatars"),
        avatars_url_prefix: "/avatars".to_string(),
        name_field: "姓名".to_string(),
        selection_size: 30,
    }
}

/// 2025-01-01 12:{minute}:{second}.
pub fn noon(minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|d| d.and_hms_opt(12, minute, second))
        .expect("valid datetime")
}

/// Write a snapshot with `names` into a fresh directory, plus a portrait
/// for every name in `with_portrait`.
pub fn write_inputs(names: &[String], with_portrait: &[String]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::create_dir(dir.path().join("avatars")).expect("create avatars dir");

    let rows: Vec<Value> = names
        .iter()
        .map(|n| json!({ "姓名": n, "职业": "近卫", "稀有度": 5 }))
        .collect();
    fs::write(
        dir.path().join("operators_data.json"),
        serde_json::to_string(&rows).expect("serialize rows"),
    )
    .expect("write snapshot");

    for name in with_portrait {
        fs::write(
            dir.path().join("avatars").join(format!("{name}.png")),
            b"png",
        )
        .expect("write portrait");
    }
    dir
}

/// `R00` .. `R{n-1}`.
pub fn fixture_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("R{i:02}")).collect()
}

/// Inputs where every one of `n` records has a portrait.
pub fn resolvable_fixture(n: usize) -> TempDir {
    let names = fixture_names(n);
    write_inputs(&names, &names)
}

/// Build the full application router with its clock frozen at `now`.
///
/// Uses the same router builder as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(config: ServerConfig, now: NaiveDateTime) -> Router {
    let selection = Arc::new(SelectionService::from_config(
        &config,
        Arc::new(FixedClock(now)),
    ));
    let state = AppState {
        config: Arc::new(config.clone()),
        selection,
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    app.oneshot(request).await.expect("request failed")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// `GET /api/operators` on a fresh app frozen at `now`, as JSON.
pub async fn fetch_operators(config: ServerConfig, now: NaiveDateTime) -> Value {
    let app = build_test_app(config, now);
    body_json(get(app, "/api/operators").await).await
}

/// Display names of the `operators` array, in response order.
pub fn operator_names(json: &Value) -> Vec<String> {
    json["operators"]
        .as_array()
        .expect("operators array")
        .iter()
        .map(|op| op["姓名"].as_str().expect("name field").to_string())
        .collect()
}
