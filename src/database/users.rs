use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::User;

#[async_trait]
pub trait UserRepo: Send + Sync {
    /// `None` when the user does not exist
    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<User>, DatabaseError>;
}

pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepo for PgUserRepo {
    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users
             SET name = $2, updated_at = now()
             WHERE id = $1
             RETURNING id, name, email, image, role, created_at, updated_at",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
