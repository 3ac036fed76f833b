mod common;

use std::sync::Arc;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::Value;

use bizadmin_api::database::models::VariableKey;
use bizadmin_api::database::{MemoryUserRepo, MemoryVariableRepo};
use bizadmin_api::{app, AppState};

use common::{send, SECRET};

async fn setup_with(stored: Option<Option<&str>>) -> Result<(StatusCode, Value)> {
    let variables = match stored {
        Some(value) => MemoryVariableRepo::with(VariableKey::Setup, value),
        None => MemoryVariableRepo::new(),
    };
    let state = AppState::in_memory(Arc::new(variables), Arc::new(MemoryUserRepo::new()), SECRET);
    send(&app(state), Method::GET, "/api/auth/setup", None, None).await
}

#[tokio::test]
async fn fresh_install_reports_false() -> Result<()> {
    let (status, body) = setup_with(None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Bool(false));
    Ok(())
}

#[tokio::test]
async fn completed_setup_reports_true() -> Result<()> {
    let (status, body) = setup_with(Some(Some("true"))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Bool(true));
    Ok(())
}

#[tokio::test]
async fn only_exact_true_counts() -> Result<()> {
    for stored in [Some("false"), Some("TRUE"), Some("1"), Some(""), None] {
        let (status, body) = setup_with(Some(stored)).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Bool(false), "stored value {:?}", stored);
    }
    Ok(())
}

#[tokio::test]
async fn flag_change_is_seen_on_next_request() -> Result<()> {
    let variables = Arc::new(MemoryVariableRepo::new());
    let state = AppState::in_memory(variables.clone(), Arc::new(MemoryUserRepo::new()), SECRET);
    let router = app(state);

    let (_, before) = send(&router, Method::GET, "/api/auth/setup", None, None).await?;
    assert_eq!(before, Value::Bool(false));

    variables.set(VariableKey::Setup, Some("true")).await;

    let (_, after) = send(&router, Method::GET, "/api/auth/setup", None, None).await?;
    assert_eq!(after, Value::Bool(true));
    Ok(())
}

#[tokio::test]
async fn in_memory_health_is_ok() -> Result<()> {
    let (status, body) = send(&app(AppState::empty(SECRET)), Method::GET, "/health", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["database"], "in-memory");
    Ok(())
}
