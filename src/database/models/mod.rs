pub mod category;
pub mod product;
pub mod supplier;
pub mod task;
pub mod user;
pub mod variable;

pub use category::Category;
pub use product::Product;
pub use supplier::Supplier;
pub use task::Task;
pub use user::User;
pub use variable::{Variable, VariableKey};
