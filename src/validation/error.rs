use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Every field that failed its constraint, keyed by wire field name.
///
/// `form` carries failures that are not tied to a single field, such as a
/// payload that is not a JSON object at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("validation failed on {} field(s)", .fields.len())]
pub struct ValidationFailure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    pub fields: BTreeMap<String, String>,
}

impl ValidationFailure {
    pub fn form(message: impl Into<String>) -> Self {
        Self {
            form: Some(message.into()),
            fields: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(field.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.form.is_none() && self.fields.is_empty()
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}
