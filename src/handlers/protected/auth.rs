use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::Json;
use serde_json::Value;

use crate::auth::{Session, SessionUser};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validation::{ProfileUpdate, Validated};

/// GET /api/auth/session - the caller's session as decoded from the token
pub async fn session_get(Extension(session): Extension<Session>) -> ApiResult<Session> {
    Ok(ApiResponse::success(session))
}

/// PATCH /api/auth/user - rename the signed-in user (settings page)
pub async fn user_patch(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<SessionUser> {
    let Json(body) = body.map_err(|e| ApiError::invalid_json(e.body_text()))?;
    let update = ProfileUpdate::validate(&body)?;

    let updated = state
        .users
        .update_name(user.id, &update.name)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    tracing::info!(user = %updated.id, "profile name updated");
    Ok(ApiResponse::success(updated.session_user()))
}
