//! # Rider Actor
//!
//! The rider directory: a [`ResourceActor`] over [`Rider`] with no dependencies and no
//! custom actions.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Rider`]
//! - [`error`] - [`RiderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use ride_dispatch::rider_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = rider_actor::new(32);
//!
//!     // No dependencies, so the context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let rider = client.register_rider("Asha", "Koramangala").await?;
//!     assert_eq!(rider.id.to_string(), "rider_1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::RiderClient;
use crate::framework::ResourceActor;
use crate::model::Rider;

/// Creates a new Rider actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Rider>, RiderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RiderClient::new(generic_client))
}
