use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Constraint, FieldRule, Schema, Updatable, Validated};

pub static CREATE: Lazy<Schema> = Lazy::new(|| {
    Schema::new("task")
        .field(FieldRule::new("title", Constraint::min_len(3)))
        .field(FieldRule::new("description", Constraint::text()))
        .field(FieldRule::new("typeId", Constraint::Uuid).with_message("Select a type"))
});

pub static UPDATE: Lazy<Schema> = Lazy::new(|| CREATE.with_id("task_update"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    #[serde(rename = "typeId")]
    pub type_id: Uuid,
}

impl Validated for NewTask {
    fn schema() -> &'static Schema {
        &CREATE
    }
}

impl Updatable for NewTask {
    fn update_schema() -> &'static Schema {
        &UPDATE
    }
}
