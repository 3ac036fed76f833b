use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Constraint, FieldRule, Schema, Updatable, Validated};

pub static CREATE: Lazy<Schema> = Lazy::new(|| {
    Schema::new("supplier")
        .field(FieldRule::new("name", Constraint::min_len(3)))
        .field(FieldRule::new("phone", Constraint::min_len(3)))
        .field(FieldRule::new("email", Constraint::empty_or(Constraint::Email)))
        .field(FieldRule::new("address", Constraint::text()))
});

pub static UPDATE: Lazy<Schema> = Lazy::new(|| CREATE.with_id("supplier_update"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub phone: String,
    /// Empty when the supplier has no email on file
    pub email: String,
    pub address: String,
}

impl Validated for NewSupplier {
    fn schema() -> &'static Schema {
        &CREATE
    }
}

impl Updatable for NewSupplier {
    fn update_schema() -> &'static Schema {
        &UPDATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::SupplierUpdate;
    use serde_json::json;

    fn with_email(email: &str) -> serde_json::Value {
        json!({ "name": "Acme", "phone": "555", "email": email, "address": "" })
    }

    #[test]
    fn email_may_be_empty() {
        assert!(NewSupplier::validate(&with_email("")).is_ok());
    }

    #[test]
    fn email_must_be_valid_when_present() {
        let err = NewSupplier::validate(&with_email("not-an-email")).unwrap_err();
        assert_eq!(err.message_for("email"), Some("Invalid email"));
        assert!(NewSupplier::validate(&with_email("a@b.com")).is_ok());
    }

    #[test]
    fn short_phone_rejected() {
        let err = NewSupplier::validate(&json!({
            "name": "Acme", "phone": "55", "email": "", "address": "Main St"
        }))
        .unwrap_err();
        assert_eq!(err.message_for("phone"), Some("String must contain at least 3 character(s)"));
    }

    #[test]
    fn update_is_create_plus_id() {
        let mut body = with_email("");
        body["id"] = json!("0f8fad5b-d9cb-469f-a165-70867728950e");
        let update = SupplierUpdate::validate(&body).unwrap();
        assert_eq!(update.fields, NewSupplier::validate(&with_email("")).unwrap());

        let err = SupplierUpdate::validate(&with_email("")).unwrap_err();
        assert_eq!(err.fields.len(), 1);
        assert_eq!(err.message_for("id"), Some("Required"));

        body["email"] = json!("nope");
        let err = SupplierUpdate::validate(&body).unwrap_err();
        assert_eq!(err.message_for("email"), Some("Invalid email"));
    }
}
