use shared::ObjectId;
use thiserror::Error;
use validation::ValidationError;

use crate::module::Module;

#[derive(Error, Debug)]
pub enum RoosterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("{module} entry not found: {id}")]
    NotFound { module: Module, id: ObjectId },
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RoosterError {
    /// True when the caller sent something wrong, as opposed to a store failure.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, RoosterError::Storage(_))
    }

    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            RoosterError::Validation(err) => Some(err),
            _ => None,
        }
    }
}
