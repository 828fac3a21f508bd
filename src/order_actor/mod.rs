//! # Order Actor
//!
//! The single store every role works against. One [`ResourceActor<Order>`] task owns
//! all orders and applies requests one at a time, so two roles touching the same
//! order never interleave inside a transition.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//!   and the passive `set_status` setter
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory for the actor and its raw client
//!
//! ## Context
//!
//! The actor is started with the [`EventBus`](crate::events::EventBus) as its context;
//! every status change is reported on it from inside the actor.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates the order actor and its client. `mailbox_capacity` bounds pending requests.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(mailbox_capacity)
}
