//! Error types for the Rider actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during rider operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RiderError {
    /// The requested rider was not found.
    #[error("Rider not found: {0}")]
    NotFound(String),

    /// The rider data provided is invalid.
    #[error("Rider validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RiderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => RiderError::NotFound(id),
            other => other
                .downcast_entity::<RiderError>()
                .unwrap_or_else(|e| RiderError::ActorCommunicationError(e.to_string())),
        }
    }
}
