//! Payload schemas for every entity the API accepts.
//!
//! Each schema is a static value built once; handlers call
//! [`Validated::validate`] on the raw JSON body before anything reaches a
//! repository.

pub mod auth;
pub mod category;
pub mod constraint;
pub mod error;
pub mod product;
pub mod schema;
pub mod supplier;
pub mod task;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub use auth::{ProfileUpdate, SignIn};
pub use category::NewCategory;
pub use constraint::Constraint;
pub use error::ValidationFailure;
pub use product::NewProduct;
pub use schema::{FieldRule, Schema};
pub use supplier::NewSupplier;
pub use task::NewTask;

/// A typed payload bound to a static schema.
pub trait Validated: DeserializeOwned {
    fn schema() -> &'static Schema;

    fn validate(input: &Value) -> Result<Self, ValidationFailure> {
        Self::schema().parse(input)
    }
}

/// Create payloads that also have an update shape (same rules plus `id`).
pub trait Updatable: Validated {
    fn update_schema() -> &'static Schema;
}

/// Update payload: identifier plus the full create field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update<T> {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: T,
}

impl<T: Updatable> Validated for Update<T> {
    fn schema() -> &'static Schema {
        T::update_schema()
    }
}

pub type CategoryUpdate = Update<NewCategory>;
pub type ProductUpdate = Update<NewProduct>;
pub type SupplierUpdate = Update<NewSupplier>;
pub type TaskUpdate = Update<NewTask>;
