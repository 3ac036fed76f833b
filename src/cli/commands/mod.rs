pub mod auth;
pub mod setup;
pub mod validate;
