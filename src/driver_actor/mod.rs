//! # Driver Actor
//!
//! The driver directory, and the only writer of driver state.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Driver`]
//! - [`error`] - [`DriverError`] type for type-safe error handling
//! - [`actions`] - [`DriverAction`] for availability changes
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! // Compare-and-set: fails with DriverError::Unavailable if already on a ride
//! driver_client.reserve(driver_id).await?;
//!
//! // Ride completed: available again, one more ride on the counter
//! driver_client.finish_trip(driver_id).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::DriverClient;
use crate::framework::ResourceActor;
use crate::model::Driver;

/// Creates a new Driver actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Driver>, DriverClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, DriverClient::new(generic_client))
}
