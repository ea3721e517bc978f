use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A list operation found no rows at all. The API contract treats an
    /// empty collection as 404 rather than an empty 200 body.
    #[error("No {entity} records found")]
    NoRows { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
