// handlers/protected/mod.rs - handlers behind jwt_auth_middleware
pub mod auth;
pub mod entity;

pub use auth::{session_get, user_patch};
