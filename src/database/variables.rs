use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Variable, VariableKey};

/// Read access to the key/value configuration table.
#[async_trait]
pub trait VariableRepo: Send + Sync {
    async fn find_by_key(&self, key: VariableKey) -> Result<Option<Variable>, DatabaseError>;
}

pub struct PgVariableRepo {
    pool: PgPool,
}

impl PgVariableRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VariableRepo for PgVariableRepo {
    async fn find_by_key(&self, key: VariableKey) -> Result<Option<Variable>, DatabaseError> {
        let variable = sqlx::query_as::<_, Variable>(
            "SELECT key, value
             FROM variables
             WHERE key = $1",
        )
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(variable)
    }
}
