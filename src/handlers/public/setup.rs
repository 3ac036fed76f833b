use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/auth/setup - has initial setup completed?
///
/// Body is a bare JSON boolean, not the usual success envelope. A failed
/// lookup surfaces as a 500 through `ApiError`.
pub async fn setup_get(State(state): State<AppState>) -> Result<Json<bool>, ApiError> {
    let complete = state.setup.is_setup_complete().await?;
    Ok(Json(complete))
}
