//! # Ride Actor
//!
//! Owns every ride and drives the ride lifecycle:
//!
//! ```text
//! Requested -> Assigned -> Completed
//!     \            \
//!      +------------+----> Cancelled
//! ```
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for
//!   [`Ride`], plus the [`RideContext`] it runs with
//! - [`error`] - [`RideError`]
//! - [`actions`] - [`RideAction`] and [`RideActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The ride actor depends on both directories and both strategies. They are injected via
//! `run(context)` after all actors exist:
//!
//! ```rust,ignore
//! let context = RideContext::new(rider_client, driver_client, matching, fare);
//! tokio::spawn(ride_actor.run(context));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::{RideContext, MAX_MATCH_ATTEMPTS};
pub use error::*;

use crate::clients::RideClient;
use crate::framework::ResourceActor;
use crate::model::Ride;

/// Creates a new Ride actor and its client. The actor needs a [`RideContext`] to run.
pub fn new(buffer_size: usize) -> (ResourceActor<Ride>, RideClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RideClient::new(generic_client))
}
