//! Handler for the minute-seeded character selection.

use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::service::DailySelection;
use crate::state::AppState;

/// GET /api/operators
///
/// Return the selection for the current minute and its verification code.
/// Every caller within the same minute receives an identical body.
pub async fn get_operators(State(state): State<AppState>) -> AppResult<Json<DailySelection>> {
    let selection = state.selection.daily_selection().await?;

    tracing::info!(
        code = %selection.verification_code,
        count = selection.operators.len(),
        "Served selection",
    );

    Ok(Json(selection))
}
