//! # Generic Messages
//!
//! Requests carried from [`ResourceClient`](super::ResourceClient) to
//! [`ResourceActor`](super::ResourceActor), each with its own reply channel.

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor.
///
/// - **Create**: mint an id and store a new entity built from [`ActorEntity::Create`].
/// - **Get**: return a snapshot (clone) of the entity, if present.
/// - **Action**: run an [`ActorEntity::Action`] with exclusive access to the entity.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
