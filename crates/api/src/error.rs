use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce `{ "detail": ..., "code": ... }`
/// JSON bodies. Both domain failures are server-side problems (bad
/// deployment or bad data), so both map to 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail) = match &self {
            AppError::Core(core) => match core {
                CoreError::Configuration(msg) => {
                    tracing::error!(error = %msg, "Configuration error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "CONFIGURATION_ERROR",
                        msg.clone(),
                    )
                }
                CoreError::InsufficientData {
                    required,
                    available,
                } => {
                    tracing::error!(required, available, "Not enough eligible records");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INSUFFICIENT_DATA",
                        format!(
                            "Not enough eligible operators: {required} required, only {available} available"
                        ),
                    )
                }
            },
        };

        let body = json!({
            "detail": detail,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
