use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Constraint, FieldRule, Schema, Updatable, Validated};

pub static CREATE: Lazy<Schema> = Lazy::new(|| {
    Schema::new("product")
        .field(FieldRule::new("name", Constraint::min_len(3)))
        .field(FieldRule::new("price", Constraint::Number { min: 1.0 }))
        .field(FieldRule::new("description", Constraint::text()))
});

pub static UPDATE: Lazy<Schema> = Lazy::new(|| CREATE.with_id("product_update"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    /// Any JSON number; the column is `numeric`
    pub price: f64,
    pub description: String,
}

impl Validated for NewProduct {
    fn schema() -> &'static Schema {
        &CREATE
    }
}

impl Updatable for NewProduct {
    fn update_schema() -> &'static Schema {
        &UPDATE
    }
}
