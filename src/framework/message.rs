//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](crate::framework::ResourceClient) to a
//! [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// - **Create**: build a new entity from [`ActorEntity::Create`], run `on_create`, store it.
///   Responds with the stored entity.
/// - **Get**: fetch one entity by id.
/// - **List**: snapshot of every entity, ordered by id.
/// - **Update**: apply [`ActorEntity::Update`] to an existing entity.
/// - **Action**: run a custom [`ActorEntity::Action`] against one entity.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
