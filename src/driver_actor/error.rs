//! Error types for the Driver actor.

use crate::framework::FrameworkError;
use crate::model::DriverId;
use thiserror::Error;

/// Errors that can occur during driver operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DriverError {
    /// The requested driver was not found.
    #[error("Driver not found: {0}")]
    NotFound(String),

    /// The driver is already on a ride, or off duty when asked to take one.
    #[error("Driver unavailable: {0}")]
    Unavailable(DriverId),

    /// The driver data provided is invalid.
    #[error("Driver validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for DriverError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => DriverError::NotFound(id),
            other => other
                .downcast_entity::<DriverError>()
                .unwrap_or_else(|e| DriverError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_errors_come_back_typed() {
        let boxed = FrameworkError::EntityError(Box::new(DriverError::Unavailable(DriverId(3))));
        assert_eq!(DriverError::from(boxed), DriverError::Unavailable(DriverId(3)));
    }

    #[test]
    fn transport_errors_become_communication_errors() {
        assert_eq!(
            DriverError::from(FrameworkError::ActorClosed),
            DriverError::ActorCommunicationError("Actor closed".into())
        );
        assert_eq!(
            DriverError::from(FrameworkError::NotFound("driver_9".into())),
            DriverError::NotFound("driver_9".into())
        );
    }
}
