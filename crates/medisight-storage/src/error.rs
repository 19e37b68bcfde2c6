use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("consultation not found: {id}")]
    NotFound { id: Uuid },

    #[error("consultation already exists: {id}")]
    Conflict { id: Uuid },
}
