//! Error types for the Order actor.
//!
//! Rejected transitions are not errors; they come back as
//! [`Transition::Rejected`](super::Transition::Rejected). These variants cover the
//! plumbing only.

use crate::model::OrderId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// No order with this id exists in the store.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The order actor is gone or answered with something unexpected.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
