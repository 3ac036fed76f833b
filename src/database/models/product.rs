use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::entity::Entity;
use crate::validation::NewProduct;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Product {
    type Fields = NewProduct;
    const TABLE: &'static str = "products";
    const LABEL: &'static str = "Product";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn assemble(id: Uuid, fields: NewProduct, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            description: fields.description,
            created_at,
            updated_at,
        }
    }
}
