use std::net::SocketAddr;
use std::sync::Arc;

use roster_core::seed::SystemClock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_api::config::ServerConfig;
use roster_api::router::build_app_router;
use roster_api::service::SelectionService;
use roster_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_api=debug,roster_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        snapshot = %config.snapshot_path.display(),
        avatars = %config.avatars_dir.display(),
        selection_size = config.selection_size,
        "Loaded server configuration"
    );

    // --- Selection service ---
    let selection = Arc::new(SelectionService::from_config(
        &config,
        Arc::new(SystemClock),
    ));

    // Warm the record cache. A failure here is not fatal: requests report it
    // and retry the load until the inputs are fixed.
    match selection.eligible().await {
        Ok(eligible) if eligible.len() < config.selection_size => tracing::warn!(
            eligible = eligible.len(),
            required = config.selection_size,
            "Not enough eligible records; selections will fail"
        ),
        Ok(eligible) => tracing::info!(eligible = eligible.len(), "Record cache warmed"),
        Err(e) => tracing::warn!(error = %e, "Initial snapshot load failed"),
    }

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        selection,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
