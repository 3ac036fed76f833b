use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::validation::{Update, Updatable};

/// A persisted domain record whose writable fields are a validated payload.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Create payload; the update payload is `Update<Self::Fields>`
    type Fields: Updatable + Serialize + Clone + Send + Sync + 'static;

    const TABLE: &'static str;

    /// Human name used in error messages
    const LABEL: &'static str;

    fn id(&self) -> Uuid;

    fn created_at(&self) -> DateTime<Utc>;

    fn assemble(id: Uuid, fields: Self::Fields, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self;

    /// Column name -> value written on insert and update.
    fn columns(fields: &Self::Fields) -> Map<String, Value> {
        match serde_json::to_value(fields) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// CRUD storage for one entity type.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    async fn list(&self) -> Result<Vec<E>, DatabaseError>;

    async fn get(&self, id: Uuid) -> Result<Option<E>, DatabaseError>;

    async fn insert(&self, fields: E::Fields) -> Result<E, DatabaseError>;

    /// `None` when no record has the given id
    async fn update(&self, update: Update<E::Fields>) -> Result<Option<E>, DatabaseError>;

    /// `false` when no record has the given id
    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError>;
}
