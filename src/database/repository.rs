use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::database::entity::{Entity, EntityStore};
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::validation::Update;

/// Postgres-backed store. Rows travel as JSON (`row_to_json` out,
/// `jsonb_populate_record` in) so one implementation serves every entity.
pub struct PgEntityStore<E> {
    pool: PgPool,
    _phantom: std::marker::PhantomData<E>,
}

impl<E: Entity> PgEntityStore<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    fn table() -> String {
        DatabaseManager::quote_identifier(E::TABLE)
    }

    fn column_list(fields: &E::Fields) -> Vec<String> {
        E::columns(fields)
            .keys()
            .map(|k| DatabaseManager::quote_identifier(k))
            .collect()
    }

    fn payload(fields: &E::Fields) -> Value {
        Value::Object(E::columns(fields))
    }

    fn decode(row: &sqlx::postgres::PgRow) -> Result<E, DatabaseError> {
        let value: Value = row.try_get("row")?;
        serde_json::from_value(value)
            .map_err(|e| DatabaseError::QueryError(format!("{} row did not decode: {}", E::LABEL, e)))
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for PgEntityStore<E> {
    async fn list(&self) -> Result<Vec<E>, DatabaseError> {
        let sql = format!(
            "SELECT row_to_json(t) AS row FROM (SELECT * FROM {} ORDER BY created_at, id) t",
            Self::table()
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(Self::decode).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<E>, DatabaseError> {
        let sql = format!(
            "SELECT row_to_json(t) AS row FROM (SELECT * FROM {} WHERE id = $1) t",
            Self::table()
        );
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref().map(Self::decode).transpose()
    }

    async fn insert(&self, fields: E::Fields) -> Result<E, DatabaseError> {
        let table = Self::table();
        let columns = Self::column_list(&fields).join(", ");
        let sql = format!(
            "WITH inserted AS (\
                INSERT INTO {table} (id, {columns}) \
                SELECT $1, {columns} FROM jsonb_populate_record(NULL::{table}, $2) \
                RETURNING *\
            ) SELECT row_to_json(inserted) AS row FROM inserted"
        );

        let row = sqlx::query(&sql)
            .bind(Uuid::new_v4())
            .bind(Self::payload(&fields))
            .fetch_one(&self.pool)
            .await?;
        let created = Self::decode(&row)?;
        tracing::info!(table = E::TABLE, id = %created.id(), "record created");
        Ok(created)
    }

    async fn update(&self, update: Update<E::Fields>) -> Result<Option<E>, DatabaseError> {
        let table = Self::table();
        let columns = Self::column_list(&update.fields).join(", ");
        let sql = format!(
            "WITH updated AS (\
                UPDATE {table} SET ({columns}, updated_at) = \
                (SELECT {columns}, now() FROM jsonb_populate_record(NULL::{table}, $2)) \
                WHERE id = $1 RETURNING *\
            ) SELECT row_to_json(updated) AS row FROM updated"
        );

        let row = sqlx::query(&sql)
            .bind(update.id)
            .bind(Self::payload(&update.fields))
            .fetch_optional(&self.pool)
            .await?;
        let updated = row.as_ref().map(Self::decode).transpose()?;
        if updated.is_some() {
            tracing::info!(table = E::TABLE, id = %update.id, "record updated");
        }
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", Self::table());
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(table = E::TABLE, id = %id, "record deleted");
        }
        Ok(deleted)
    }
}
