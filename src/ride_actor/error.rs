//! Error types for the Ride actor.

use crate::driver_actor::DriverError;
use crate::framework::FrameworkError;
use crate::model::{RideId, RiderId};
use crate::rider_actor::RiderError;
use crate::strategy::NoDriverAvailable;
use thiserror::Error;

/// Errors that can occur during ride operations.
///
/// Failures from the directories the ride actor depends on are wrapped with `#[from]`,
/// so `?` works inside the hooks.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RideError {
    /// The matching strategy found no available driver. Nothing was recorded.
    #[error(transparent)]
    NoDriverAvailable(#[from] NoDriverAvailable),

    /// The ride was requested for a rider the directory does not know.
    #[error("Rider not found: {0}")]
    RiderNotFound(RiderId),

    /// Distance must be a positive, finite number of kilometres.
    #[error("Invalid distance: {0} km")]
    InvalidDistance(f64),

    /// The requested ride was not found.
    #[error("Ride not found: {0}")]
    NotFound(String),

    /// An assigned ride with no driver recorded. Indicates a bug.
    #[error("Ride {0} is assigned but has no driver")]
    MissingDriver(RideId),

    #[error("Rider directory error: {0}")]
    Rider(#[from] RiderError),

    #[error("Driver directory error: {0}")]
    Driver(#[from] DriverError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RideError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => RideError::NotFound(id),
            other => other
                .downcast_entity::<RideError>()
                .unwrap_or_else(|e| RideError::ActorCommunicationError(e.to_string())),
        }
    }
}
