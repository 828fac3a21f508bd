//! # ActorEntity Trait
//!
//! The contract a type must satisfy to live inside a [`ResourceActor`](super::ResourceActor).
//! Associated types pin down the id, the creation payload, the custom actions and the
//! run-time context, so a request meant for one entity type cannot reach another.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored entity must implement.
///
/// # Async & Context
/// `handle_action` is `async` and receives the actor's `Context`, which is injected when the
/// actor starts (`run(context)`) rather than when it is constructed. The order store
/// uses this to hand every `Order` the event bus it reports transitions on.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier; the actor mints ids from a monotonic `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Entity-specific operations processed inside the actor.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every action. Use `()` if none are needed.
    type Context: Send + Sync;

    /// Per-entity error type, boxed into [`FrameworkError::EntityError`](super::FrameworkError::EntityError)
    /// when it crosses the channel.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its freshly minted id and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Handle a custom action. The actor guarantees exclusive access for the
    /// duration of the call.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
