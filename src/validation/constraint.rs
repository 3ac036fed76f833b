use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde_json::Value;

/// local@domain.tld, TLD of two or more letters. Leading dots and `..` in the
/// local part are rejected separately since regex-lite has no lookahead.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Canonical 8-4-4-4-12 hyphenated form only.
static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern compiles")
});

/// A predicate over one field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// String with at least `min_len` characters (0 means any string)
    Text { min_len: usize },
    /// Syntactically valid email address
    Email,
    /// Hyphenated UUID string
    Uuid,
    /// JSON number, inclusive lower bound
    Number { min: f64 },
    /// Exactly the empty string, or whatever `inner` accepts
    EmptyOr(Box<Constraint>),
}

impl Constraint {
    pub fn text() -> Self {
        Constraint::Text { min_len: 0 }
    }

    pub fn min_len(min_len: usize) -> Self {
        Constraint::Text { min_len }
    }

    pub fn empty_or(inner: Constraint) -> Self {
        Constraint::EmptyOr(Box::new(inner))
    }

    /// Check a (possibly missing) field value, returning the default message on failure.
    pub fn check(&self, value: Option<&Value>) -> Result<(), String> {
        let value = match value {
            None => return Err("Required".to_string()),
            Some(v) => v,
        };

        match self {
            Constraint::Text { min_len } => {
                let s = expect_str(value)?;
                if s.chars().count() < *min_len {
                    return Err(format!("String must contain at least {} character(s)", min_len));
                }
                Ok(())
            }
            Constraint::Email => {
                let s = expect_str(value)?;
                if is_email(s) {
                    Ok(())
                } else {
                    Err("Invalid email".to_string())
                }
            }
            Constraint::Uuid => {
                let s = expect_str(value)?;
                if UUID_RE.is_match(s) {
                    Ok(())
                } else {
                    Err("Invalid uuid".to_string())
                }
            }
            Constraint::Number { min } => {
                let n = match value {
                    Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
                    other => return Err(type_mismatch("number", other)),
                };
                if n >= *min {
                    Ok(())
                } else {
                    Err(format!("Number must be greater than or equal to {}", min))
                }
            }
            Constraint::EmptyOr(inner) => match value {
                Value::String(s) if s.is_empty() => Ok(()),
                other => inner.check(Some(other)),
            },
        }
    }
}

pub fn is_email(s: &str) -> bool {
    let local = s.split('@').next().unwrap_or_default();
    !local.starts_with('.') && !local.contains("..") && EMAIL_RE.is_match(s)
}

fn expect_str(value: &Value) -> Result<&str, String> {
    value.as_str().ok_or_else(|| type_mismatch("string", value))
}

fn type_mismatch(expected: &str, value: &Value) -> String {
    let received = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    format!("Expected {}, received {}", expected, received)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_value_is_required() {
        assert_eq!(Constraint::text().check(None), Err("Required".to_string()));
        assert_eq!(Constraint::Uuid.check(None), Err("Required".to_string()));
    }

    #[test]
    fn text_counts_characters() {
        let c = Constraint::min_len(3);
        assert!(c.check(Some(&json!("abc"))).is_ok());
        assert!(c.check(Some(&json!("日本語"))).is_ok());
        assert_eq!(
            c.check(Some(&json!("ab"))),
            Err("String must contain at least 3 character(s)".to_string())
        );
        assert_eq!(
            c.check(Some(&json!(12))),
            Err("Expected string, received number".to_string())
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_email("a@b.com"));
        assert!(is_email("first.last+tag@sub.example.org"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email(".lead@example.com"));
        assert!(!is_email("double..dot@example.com"));
        assert!(!is_email("x@y.c"));
        assert!(!is_email(""));
    }

    #[test]
    fn empty_or_email_accepts_exactly_empty_or_valid() {
        let c = Constraint::empty_or(Constraint::Email);
        assert!(c.check(Some(&json!(""))).is_ok());
        assert!(c.check(Some(&json!("a@b.com"))).is_ok());
        assert_eq!(c.check(Some(&json!(" "))), Err("Invalid email".to_string()));
        assert_eq!(c.check(Some(&json!("a@"))), Err("Invalid email".to_string()));
        assert_eq!(c.check(None), Err("Required".to_string()));
    }

    #[test]
    fn uuid_must_be_hyphenated() {
        let c = Constraint::Uuid;
        assert!(c.check(Some(&json!("67e55044-10b1-426f-9247-bb680e5fe0c8"))).is_ok());
        assert!(c.check(Some(&json!("67e5504410b1426f9247bb680e5fe0c8"))).is_err());
        assert!(c.check(Some(&json!("{67e55044-10b1-426f-9247-bb680e5fe0c8}"))).is_err());
        assert_eq!(c.check(Some(&json!("not-a-uuid"))), Err("Invalid uuid".to_string()));
    }

    #[test]
    fn number_bound_is_inclusive() {
        let c = Constraint::Number { min: 1.0 };
        assert!(c.check(Some(&json!(1))).is_ok());
        assert!(c.check(Some(&json!(1.5))).is_ok());
        assert_eq!(
            c.check(Some(&json!(0))),
            Err("Number must be greater than or equal to 1".to_string())
        );
        assert_eq!(
            c.check(Some(&json!("5"))),
            Err("Expected number, received string".to_string())
        );
    }
}
