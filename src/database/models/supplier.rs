use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::entity::Entity;
use crate::validation::NewSupplier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Supplier {
    type Fields = NewSupplier;
    const TABLE: &'static str = "suppliers";
    const LABEL: &'static str = "Supplier";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn assemble(id: Uuid, fields: NewSupplier, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
            address: fields.address,
            created_at,
            updated_at,
        }
    }
}
