//! # ActorEntity Trait
//!
//! The contract every resource (Rider, Driver, Ride) implements to be managed by the
//! generic [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Associated types pin each actor to its own payloads: a `Ride` actor only accepts a
//! `RideCreate`, and sending it a `DriverCreate` does not compile.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] runs after construction and before the entity is stored.
//!   If it fails, nothing is stored. The ride actor does its matching here.
//!
//! Hooks receive the actor's `Context`, which is injected by `run()` rather than `new()`
//! so that actors can be wired to each other after they are all constructed.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier allocated by the actor from its monotonic counter.
    ///
    /// `Ord` gives listings a stable order.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to construct a new entity.
    type Create: Send + Sync + Debug;

    /// Payload used to modify an existing entity.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `Reserve` on a driver).
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the hooks. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum per actor, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the allocated id and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
