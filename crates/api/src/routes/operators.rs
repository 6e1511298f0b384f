use axum::routing::get;
use axum::Router;

use crate::handlers::operators;
use crate::state::AppState;

/// Selection routes mounted at `/operators`.
///
/// ```text
/// GET    /                  -> get_operators
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(operators::get_operators))
}
