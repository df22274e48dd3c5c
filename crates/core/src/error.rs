use crate::types::DbId;
use crate::validation::rules::ValidationResult;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a `Validation` error naming every failing field and message key.
    pub fn from_validation(entity: &'static str, result: &ValidationResult) -> Self {
        let details = result
            .errors
            .iter()
            .map(|v| format!("{} ({})", v.field, v.message))
            .collect::<Vec<_>>()
            .join(", ");
        CoreError::Validation(format!("{entity}: {details}"))
    }
}
