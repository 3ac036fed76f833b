use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Well-known configuration keys in the `variables` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKey {
    /// Written once initial setup has completed
    Setup,
}

impl VariableKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            VariableKey::Setup => "setup",
        }
    }
}

impl std::fmt::Display for VariableKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value record. The meaning of `value` is up to whoever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Variable {
    pub key: String,
    pub value: Option<String>,
}
