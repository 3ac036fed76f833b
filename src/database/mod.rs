pub mod entity;
pub mod manager;
pub mod memory;
pub mod models;
pub mod repository;
pub mod users;
pub mod variables;

pub use entity::{Entity, EntityStore};
pub use manager::{DatabaseError, DatabaseManager};
pub use memory::{MemoryEntityStore, MemoryUserRepo, MemoryVariableRepo};
pub use repository::PgEntityStore;
pub use users::{PgUserRepo, UserRepo};
pub use variables::{PgVariableRepo, VariableRepo};
