use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::database::entity::Entity;
use crate::validation::NewTask;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    // Column is type_id, wire name matches the create payload
    #[serde(rename = "typeId", alias = "type_id")]
    pub type_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Task {
    type Fields = NewTask;
    const TABLE: &'static str = "tasks";
    const LABEL: &'static str = "Task";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn assemble(id: Uuid, fields: NewTask, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            type_id: fields.type_id,
            created_at,
            updated_at,
        }
    }

    fn columns(fields: &NewTask) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("title".into(), json!(fields.title));
        map.insert("description".into(), json!(fields.description));
        map.insert("type_id".into(), json!(fields.type_id));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_column_name_and_writes_wire_name() {
        let row = json!({
            "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
            "title": "Restock",
            "description": "",
            "type_id": "9b2f6a8e-3c1d-4e5f-8a7b-6c5d4e3f2a1b",
            "created_at": "2024-03-01T10:00:00.123456+00:00",
            "updated_at": "2024-03-01T10:00:00.123456+00:00"
        });
        let task: Task = serde_json::from_value(row).unwrap();
        let out = serde_json::to_value(&task).unwrap();
        assert_eq!(out["typeId"], "9b2f6a8e-3c1d-4e5f-8a7b-6c5d4e3f2a1b");
        assert!(out.get("type_id").is_none());
    }

    #[test]
    fn columns_use_snake_case() {
        let fields = NewTask {
            title: "Restock".into(),
            description: String::new(),
            type_id: Uuid::nil(),
        };
        let cols = Task::columns(&fields);
        assert!(cols.contains_key("type_id"));
        assert!(!cols.contains_key("typeId"));
    }
}
