use std::sync::Arc;

use crate::database::manager::DatabaseError;
use crate::database::models::{Variable, VariableKey};
use crate::database::variables::VariableRepo;

/// Answers whether initial setup has completed.
#[derive(Clone)]
pub struct SetupService {
    variables: Arc<dyn VariableRepo>,
}

impl SetupService {
    pub fn new(variables: Arc<dyn VariableRepo>) -> Self {
        Self { variables }
    }

    /// Repository failures propagate unchanged.
    pub async fn is_setup_complete(&self) -> Result<bool, DatabaseError> {
        let record = self.variables.find_by_key(VariableKey::Setup).await?;
        let complete = setup_flag(record.as_ref());
        tracing::debug!(found = record.is_some(), complete, "setup flag read");
        Ok(complete)
    }
}

/// True only for a record whose value is exactly `"true"`. No trimming,
/// no case folding, no other truthy spellings.
pub fn setup_flag(record: Option<&Variable>) -> bool {
    matches!(record, Some(Variable { value: Some(value), .. }) if value == "true")
}
