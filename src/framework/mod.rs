//! Generic actor plumbing for the order store.
//!
//! The store is a single [`ResourceActor`] that owns every [`Order`](crate::model::Order)
//! and applies requests one at a time. Clients never touch the entity directly; they
//! send a [`ResourceRequest`] and await the reply.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait implemented by anything the actor can store
//! - [`ResourceActor`] - The server half: owns the store and the id counter
//! - [`ResourceClient`] - The cloneable client half
//! - [`ActorClient`] - Shared `get` for domain-specific client wrappers
//! - [`FrameworkError`] - Plumbing failures (closed channel, unknown id)
//!
//! # Testing
//!
//! See [`mock`] for a fake actor driven by expectations.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::{ActorClient, ResourceClient};
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
