use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Constraint, FieldRule, Schema, Updatable, Validated};

pub static CREATE: Lazy<Schema> =
    Lazy::new(|| Schema::new("category").field(FieldRule::new("name", Constraint::min_len(1))));

pub static UPDATE: Lazy<Schema> = Lazy::new(|| CREATE.with_id("category_update"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl Validated for NewCategory {
    fn schema() -> &'static Schema {
        &CREATE
    }
}

impl Updatable for NewCategory {
    fn update_schema() -> &'static Schema {
        &UPDATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::CategoryUpdate;
    use serde_json::json;

    #[test]
    fn empty_name_rejected() {
        let err = NewCategory::validate(&json!({ "name": "" })).unwrap_err();
        assert_eq!(err.message_for("name"), Some("String must contain at least 1 character(s)"));
    }

    #[test]
    fn single_character_name_accepted() {
        let ok = NewCategory::validate(&json!({ "name": "A" })).unwrap();
        assert_eq!(ok.name, "A");
    }

    #[test]
    fn update_requires_id() {
        let err = CategoryUpdate::validate(&json!({ "name": "Tools" })).unwrap_err();
        assert_eq!(err.message_for("id"), Some("Required"));

        let ok = CategoryUpdate::validate(&json!({
            "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
            "name": "Tools"
        }))
        .unwrap();
        assert_eq!(ok.id.to_string(), "0f8fad5b-d9cb-469f-a165-70867728950e");
        assert_eq!(ok.fields.name, "Tools");
    }
}
