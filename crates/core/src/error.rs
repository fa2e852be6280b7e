use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The id generator handed out an id that is already stored. Indicates
    /// a logic bug in the generator, never an expected runtime condition.
    #[error("Duplicate identifier: {entity} with id {id}")]
    DuplicateId { entity: &'static str, id: DbId },
}
