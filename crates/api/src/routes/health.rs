use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// ISO 8601 timestamp format used by the health check.
const HEALTH_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Current server time.
    pub timestamp: String,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Characters per selection, as configured.
    pub selection_size: usize,
}

/// GET /api/health -- liveness only; does not touch the snapshot.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = state.selection.clock().now();

    Json(HealthResponse {
        status: "healthy",
        timestamp: now.format(HEALTH_TIMESTAMP_FORMAT).to_string(),
        version: env!("CARGO_PKG_VERSION"),
        selection_size: state.config.selection_size,
    })
}

/// Mount health check routes (nested under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
