mod common;

use std::sync::Arc;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use chrono::Utc;
use serde_json::json;

use bizadmin_api::auth::Role;
use bizadmin_api::database::models::User;
use bizadmin_api::database::{MemoryUserRepo, MemoryVariableRepo};
use bizadmin_api::{app, AppState};

use common::{send, session_user, token_for, SECRET};

#[tokio::test]
async fn protected_routes_require_token() -> Result<()> {
    let router = app(AppState::empty(SECRET));

    let (status, body) = send(&router, Method::GET, "/api/auth/session", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let (status, _) = send(&router, Method::GET, "/api/categories", Some("not.a.jwt"), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn token_signed_with_other_secret_rejected() -> Result<()> {
    let router = app(AppState::empty("another-secret"));
    let token = token_for(&session_user(Role::Admin));

    let (status, _) = send(&router, Method::GET, "/api/auth/session", Some(&token), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn session_always_carries_role() -> Result<()> {
    let router = app(AppState::empty(SECRET));

    for role in [Role::Admin, Role::User] {
        let user = session_user(role);
        let token = token_for(&user);
        let (status, body) = send(&router, Method::GET, "/api/auth/session", Some(&token), None).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["user"]["role"], role.as_str());
        assert_eq!(body["data"]["user"]["id"], user.id.to_string());
        assert!(body["data"]["expires"].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn signin_accepts_valid_email() -> Result<()> {
    let router = app(AppState::empty(SECRET));

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/auth/signin",
        None,
        Some(json!({ "email": "robin@example.com", "callbackUrl": "/" })),
    )
    .await?;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["data"]["email"], "robin@example.com");
    Ok(())
}

#[tokio::test]
async fn signin_rejects_bad_email() -> Result<()> {
    let router = app(AppState::empty(SECRET));

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/auth/signin",
        None,
        Some(json!({ "email": "robin" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field_errors"]["email"], "Invalid email");
    Ok(())
}

#[tokio::test]
async fn user_patch_renames_signed_in_user() -> Result<()> {
    let users = Arc::new(MemoryUserRepo::new());
    let session = session_user(Role::User);
    let now = Utc::now();
    users
        .insert(User {
            id: session.id,
            name: Some("Robin".to_string()),
            email: "robin@example.com".to_string(),
            image: None,
            role: "user".to_string(),
            created_at: now,
            updated_at: now,
        })
        .await;

    let state = AppState::in_memory(Arc::new(MemoryVariableRepo::new()), users, SECRET);
    let router = app(state);
    let token = token_for(&session);

    let (status, body) = send(
        &router,
        Method::PATCH,
        "/api/auth/user",
        Some(&token),
        Some(json!({ "name": "Robin Q" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Robin Q");
    assert_eq!(body["data"]["role"], "user");

    let (status, body) = send(
        &router,
        Method::PATCH,
        "/api/auth/user",
        Some(&token),
        Some(json!({ "name": 42 })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field_errors"]["name"], "Expected string, received number");
    Ok(())
}

#[tokio::test]
async fn user_patch_for_unknown_user_is_404() -> Result<()> {
    let router = app(AppState::empty(SECRET));
    let token = token_for(&session_user(Role::User));

    let (status, _) = send(
        &router,
        Method::PATCH,
        "/api/auth/user",
        Some(&token),
        Some(json!({ "name": "Nobody" })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
