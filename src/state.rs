use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::database::models::{Category, Product, Supplier, Task};
use crate::database::{
    EntityStore, MemoryEntityStore, MemoryUserRepo, MemoryVariableRepo, PgEntityStore, PgUserRepo,
    PgVariableRepo, UserRepo, VariableRepo,
};
use crate::services::SetupService;

pub type Store<E> = Arc<dyn EntityStore<E>>;

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub setup: SetupService,
    pub users: Arc<dyn UserRepo>,
    pub categories: Store<Category>,
    pub products: Store<Product>,
    pub suppliers: Store<Supplier>,
    pub tasks: Store<Task>,
    pub jwt_secret: Arc<str>,
    /// Set only for Postgres-backed state; `/health` pings it
    pub pool: Option<PgPool>,
}

impl AppState {
    pub fn postgres(pool: PgPool, jwt_secret: &str) -> Self {
        Self {
            setup: SetupService::new(Arc::new(PgVariableRepo::new(pool.clone()))),
            users: Arc::new(PgUserRepo::new(pool.clone())),
            categories: Arc::new(PgEntityStore::<Category>::new(pool.clone())),
            products: Arc::new(PgEntityStore::<Product>::new(pool.clone())),
            suppliers: Arc::new(PgEntityStore::<Supplier>::new(pool.clone())),
            tasks: Arc::new(PgEntityStore::<Task>::new(pool.clone())),
            jwt_secret: Arc::from(jwt_secret),
            pool: Some(pool),
        }
    }

    /// Everything in process memory; nothing survives a restart.
    pub fn in_memory(
        variables: Arc<dyn VariableRepo>,
        users: Arc<MemoryUserRepo>,
        jwt_secret: &str,
    ) -> Self {
        Self {
            setup: SetupService::new(variables),
            users,
            categories: Arc::new(MemoryEntityStore::<Category>::new()),
            products: Arc::new(MemoryEntityStore::<Product>::new()),
            suppliers: Arc::new(MemoryEntityStore::<Supplier>::new()),
            tasks: Arc::new(MemoryEntityStore::<Task>::new()),
            jwt_secret: Arc::from(jwt_secret),
            pool: None,
        }
    }

    pub fn empty(jwt_secret: &str) -> Self {
        Self::in_memory(
            Arc::new(MemoryVariableRepo::new()),
            Arc::new(MemoryUserRepo::new()),
            jwt_secret,
        )
    }
}

impl FromRef<AppState> for Store<Category> {
    fn from_ref(state: &AppState) -> Self {
        state.categories.clone()
    }
}

impl FromRef<AppState> for Store<Product> {
    fn from_ref(state: &AppState) -> Self {
        state.products.clone()
    }
}

impl FromRef<AppState> for Store<Supplier> {
    fn from_ref(state: &AppState) -> Self {
        state.suppliers.clone()
    }
}

impl FromRef<AppState> for Store<Task> {
    fn from_ref(state: &AppState) -> Self {
        state.tasks.clone()
    }
}
