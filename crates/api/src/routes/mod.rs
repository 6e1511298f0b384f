pub mod health;
pub mod operators;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                                          liveness check
/// /operators                                       selection for the current minute
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/operators", operators::router())
}
