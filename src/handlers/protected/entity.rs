//! Generic CRUD handlers, instantiated once per entity in `routes`.
//!
//! Every write runs the entity's schema against the raw body before the
//! store sees it.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, State};
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::SessionUser;
use crate::database::Entity;
use crate::error::ApiError;
use crate::middleware::{require_admin, ApiResponse, ApiResult};
use crate::state::Store;
use crate::validation::{Constraint, Update, Validated};

/// GET /api/{entity}
pub async fn list<E: Entity>(State(store): State<Store<E>>) -> ApiResult<Vec<E>> {
    Ok(ApiResponse::success(store.list().await?))
}

/// POST /api/{entity}
pub async fn create<E: Entity>(
    State(store): State<Store<E>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<E> {
    let Json(body) = body.map_err(|e| ApiError::invalid_json(e.body_text()))?;
    let fields = <E::Fields as Validated>::validate(&body)?;
    let created = store.insert(fields).await?;
    Ok(ApiResponse::created(created))
}

/// GET /api/{entity}/:id
pub async fn show<E: Entity>(State(store): State<Store<E>>, Path(id): Path<String>) -> ApiResult<E> {
    let id = parse_id(&id)?;
    let record = store.get(id).await?.ok_or_else(|| not_found::<E>(id))?;
    Ok(ApiResponse::success(record))
}

/// PUT /api/{entity}/:id - the path id is merged into the body before the
/// update schema runs.
pub async fn update<E: Entity>(
    State(store): State<Store<E>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<E> {
    let Json(body) = body.map_err(|e| ApiError::invalid_json(e.body_text()))?;
    let body = merge_path_id(body, &id)?;
    let update = Update::<E::Fields>::validate(&body)?;
    let id = update.id;

    let updated = store.update(update).await?.ok_or_else(|| not_found::<E>(id))?;
    Ok(ApiResponse::success(updated))
}

/// DELETE /api/{entity}/:id - admin only
pub async fn delete<E: Entity>(
    State(store): State<Store<E>>,
    Extension(user): Extension<SessionUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    require_admin(&user)?;
    let id = parse_id(&id)?;
    if store.delete(id).await? {
        Ok(ApiResponse::no_content())
    } else {
        Err(not_found::<E>(id))
    }
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Constraint::Uuid
        .check(Some(&Value::String(raw.to_string())))
        .map_err(|_| ApiError::bad_request(format!("Invalid id '{}'", raw)))?;
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request(format!("Invalid id '{}'", raw)))
}

fn merge_path_id(body: Value, path_id: &str) -> Result<Value, ApiError> {
    let mut object = match body {
        Value::Object(map) => map,
        // Let the schema produce the usual form-level failure
        other => return Ok(other),
    };

    match object.get("id") {
        Some(Value::String(body_id)) if body_id != path_id => {
            return Err(ApiError::bad_request("Body id does not match path id"));
        }
        Some(Value::String(_)) | None => {}
        Some(_) => return Err(ApiError::bad_request("Body id does not match path id")),
    }

    object.insert("id".to_string(), Value::String(path_id.to_string()));
    Ok(Value::Object(object))
}

fn not_found<E: Entity>(id: Uuid) -> ApiError {
    ApiError::not_found(format!("{} {} not found", E::LABEL, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_id_fills_missing_body_id() {
        let id = "0f8fad5b-d9cb-469f-a165-70867728950e";
        let merged = merge_path_id(json!({ "name": "Tools" }), id).unwrap();
        assert_eq!(merged["id"], id);
    }

    #[test]
    fn conflicting_body_id_rejected() {
        let err = merge_path_id(
            json!({ "id": "9b2f6a8e-3c1d-4e5f-8a7b-6c5d4e3f2a1b", "name": "Tools" }),
            "0f8fad5b-d9cb-469f-a165-70867728950e",
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "BAD_REQUEST");
    }

    #[test]
    fn malformed_ids_rejected() {
        assert!(parse_id("not-a-uuid").is_err());
        assert!(parse_id("0f8fad5bd9cb469fa16570867728950e").is_err());
        assert!(parse_id("0f8fad5b-d9cb-469f-a165-70867728950e").is_ok());
    }
}
