use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::validation::{SignIn, Validated};

/// POST /api/auth/signin - request a sign-in link for an email address
///
/// Only the payload is checked here; delivering the link belongs to the
/// mail provider wired in front of this service.
pub async fn signin_post(body: Result<Json<Value>, JsonRejection>) -> ApiResult<Value> {
    let Json(body) = body.map_err(|e| ApiError::invalid_json(e.body_text()))?;
    let request = SignIn::validate(&body)?;

    tracing::info!("Sign-in requested");
    Ok(ApiResponse::accepted(json!({ "email": request.email })))
}
