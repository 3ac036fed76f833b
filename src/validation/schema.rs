use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::constraint::Constraint;
use super::error::ValidationFailure;

/// One named field and the constraint its value must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub name: &'static str,
    pub constraint: Constraint,
    /// Replaces the constraint's default message when set
    pub message: Option<&'static str>,
}

impl FieldRule {
    pub fn new(name: &'static str, constraint: Constraint) -> Self {
        Self {
            name,
            constraint,
            message: None,
        }
    }

    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// Declarative shape for one entity operation (create, update, sign-in, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: Vec<FieldRule>,
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    /// Update shape: the same rules plus a leading `id` that must be a UUID.
    pub fn with_id(&self, name: &'static str) -> Self {
        let mut fields = Vec::with_capacity(self.fields.len() + 1);
        fields.push(FieldRule::new("id", Constraint::Uuid));
        fields.extend(self.fields.iter().filter(|f| f.name != "id").cloned());
        Self { name, fields }
    }

    /// Walk every rule and collect all failures. On success returns only the
    /// declared fields; anything else in the input is dropped.
    pub fn check(&self, input: &Value) -> Result<Map<String, Value>, ValidationFailure> {
        let object = match input {
            Value::Object(map) => map,
            _ => return Err(ValidationFailure::form("Expected object")),
        };

        let mut failure = ValidationFailure::default();
        let mut accepted = Map::new();

        for rule in &self.fields {
            let value = object.get(rule.name);
            match rule.constraint.check(value) {
                Ok(()) => {
                    if let Some(v) = value {
                        accepted.insert(rule.name.to_string(), v.clone());
                    }
                }
                Err(default_message) => {
                    let message = rule.message.map(str::to_string).unwrap_or(default_message);
                    failure.insert(rule.name, message);
                }
            }
        }

        if failure.is_empty() {
            Ok(accepted)
        } else {
            tracing::debug!(schema = self.name, failed = ?failure.fields, "payload rejected");
            Err(failure)
        }
    }

    /// `check` followed by conversion into the typed payload.
    pub fn parse<T: DeserializeOwned>(&self, input: &Value) -> Result<T, ValidationFailure> {
        let accepted = self.check(input)?;
        serde_json::from_value(Value::Object(accepted)).map_err(|e| {
            tracing::warn!(schema = self.name, error = %e, "accepted payload did not convert");
            ValidationFailure::form(format!("Invalid payload: {}", e))
        })
    }
}
