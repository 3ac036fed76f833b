//! In-process repositories for tests and database-less local runs.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::entity::{Entity, EntityStore};
use crate::database::manager::DatabaseError;
use crate::database::models::{User, Variable, VariableKey};
use crate::database::users::UserRepo;
use crate::database::variables::VariableRepo;
use crate::validation::Update;

pub struct MemoryEntityStore<E> {
    records: RwLock<BTreeMap<Uuid, E>>,
}

impl<E: Entity> MemoryEntityStore<E> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<E: Entity> Default for MemoryEntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for MemoryEntityStore<E> {
    async fn list(&self) -> Result<Vec<E>, DatabaseError> {
        let records = self.records.read().await;
        let mut all: Vec<E> = records.values().cloned().collect();
        all.sort_by_key(|r| (r.created_at(), r.id()));
        Ok(all)
    }

    async fn get(&self, id: Uuid) -> Result<Option<E>, DatabaseError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn insert(&self, fields: E::Fields) -> Result<E, DatabaseError> {
        let now = Utc::now();
        let record = E::assemble(Uuid::new_v4(), fields, now, now);
        self.records.write().await.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn update(&self, update: Update<E::Fields>) -> Result<Option<E>, DatabaseError> {
        let mut records = self.records.write().await;
        let Some(existing) = records.get(&update.id) else {
            return Ok(None);
        };
        let record = E::assemble(update.id, update.fields, existing.created_at(), Utc::now());
        records.insert(update.id, record.clone());
        Ok(Some(record))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct MemoryVariableRepo {
    values: RwLock<HashMap<VariableKey, Option<String>>>,
}

impl MemoryVariableRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: VariableKey, value: Option<&str>) -> Self {
        let mut values = HashMap::new();
        values.insert(key, value.map(str::to_string));
        Self {
            values: RwLock::new(values),
        }
    }

    pub async fn set(&self, key: VariableKey, value: Option<&str>) {
        self.values.write().await.insert(key, value.map(str::to_string));
    }
}

#[async_trait]
impl VariableRepo for MemoryVariableRepo {
    async fn find_by_key(&self, key: VariableKey) -> Result<Option<Variable>, DatabaseError> {
        let values = self.values.read().await;
        Ok(values.get(&key).map(|value| Variable {
            key: key.as_str().to_string(),
            value: value.clone(),
        }))
    }
}

#[derive(Default)]
pub struct MemoryUserRepo {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

#[async_trait]
impl UserRepo for MemoryUserRepo {
    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<User>, DatabaseError> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(&id).map(|user| {
            user.name = Some(name.to_string());
            user.updated_at = Utc::now();
            user.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::Category;
    use crate::validation::NewCategory;

    #[tokio::test]
    async fn entity_store_lifecycle() {
        let store = MemoryEntityStore::<Category>::new();
        let created = store.insert(NewCategory { name: "Tools".into() }).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);

        let updated = store
            .update(Update { id: created.id, fields: NewCategory { name: "Hardware".into() } })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Hardware");
        assert_eq!(updated.created_at, created.created_at);

        assert!(store.delete(created.id).await.unwrap());
        assert!(!store.delete(created.id).await.unwrap());
        assert!(store.get(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_none() {
        let store = MemoryEntityStore::<Category>::new();
        let missing = store
            .update(Update { id: Uuid::new_v4(), fields: NewCategory { name: "x".into() } })
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn variable_repo_distinguishes_absent_and_null() {
        let repo = MemoryVariableRepo::new();
        assert!(repo.find_by_key(VariableKey::Setup).await.unwrap().is_none());

        repo.set(VariableKey::Setup, None).await;
        let record = repo.find_by_key(VariableKey::Setup).await.unwrap().unwrap();
        assert_eq!(record.key, "setup");
        assert!(record.value.is_none());
    }
}
