use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::SelectionService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (reported by the health check).
    pub config: Arc<ServerConfig>,
    /// Draws selections and owns the lazily loaded eligible set.
    pub selection: Arc<SelectionService>,
}
