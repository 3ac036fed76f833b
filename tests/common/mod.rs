#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use bizadmin_api::auth::{generate_jwt_with_secret, Claims, Role, SessionUser};

pub const SECRET: &str = "integration-secret";

pub fn session_user(role: Role) -> SessionUser {
    SessionUser {
        id: Uuid::new_v4(),
        name: Some("Robin".to_string()),
        email: Some("robin@example.com".to_string()),
        image: None,
        role,
    }
}

pub fn token_for(user: &SessionUser) -> String {
    generate_jwt_with_secret(&Claims::new(user), SECRET).expect("token should sign")
}

/// One request through the router; an empty body comes back as `Value::Null`.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let bytes = match body {
        Some(json) => Some(serde_json::to_vec(&json)?),
        None => None,
    };
    send_raw(app, method, uri, token, bytes).await
}

/// Like `send`, but the body bytes go out untouched as `application/json`.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Vec<u8>>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(bytes) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(bytes))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .with_context(|| format!("non-JSON body: {}", String::from_utf8_lossy(&bytes)))?
    };

    Ok((status, value))
}
