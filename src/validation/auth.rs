use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Constraint, FieldRule, Schema, Validated};

pub static SIGN_IN: Lazy<Schema> =
    Lazy::new(|| Schema::new("sign_in").field(FieldRule::new("email", Constraint::Email)));

pub static PROFILE_UPDATE: Lazy<Schema> =
    Lazy::new(|| Schema::new("profile_update").field(FieldRule::new("name", Constraint::text())));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignIn {
    pub email: String,
}

impl Validated for SignIn {
    fn schema() -> &'static Schema {
        &SIGN_IN
    }
}

/// Settings page update of the signed-in user's display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
}

impl Validated for ProfileUpdate {
    fn schema() -> &'static Schema {
        &PROFILE_UPDATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sign_in_requires_real_email() {
        let err = SignIn::validate(&json!({ "email": "x" })).unwrap_err();
        assert_eq!(err.message_for("email"), Some("Invalid email"));
        assert!(SignIn::validate(&json!({ "email": "x@y.com" })).is_ok());
    }

    #[test]
    fn sign_in_has_no_empty_exception() {
        assert!(SignIn::validate(&json!({ "email": "" })).is_err());
    }

    #[test]
    fn profile_update_takes_name_only() {
        let ok = ProfileUpdate::validate(&json!({ "name": "Dana", "role": "admin" })).unwrap();
        assert_eq!(ok, ProfileUpdate { name: "Dana".to_string() });
    }
}
