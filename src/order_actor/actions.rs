//! Custom actions for the Order actor.
//!
//! Handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! in [`entity`](super::entity), always with exclusive access to the order.

use crate::model::{Order, OrderStatus};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Overwrite the status, whatever it currently is.
    SetStatus(OrderStatus),
    /// Move to `next` only if the status is currently `expected`.
    ///
    /// The caller picks `expected`; the order itself knows nothing about which
    /// transitions are legal.
    Advance {
        expected: OrderStatus,
        next: OrderStatus,
    },
    /// Overwrite the total.
    SetTotal(u64),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// The status before the overwrite.
    SetStatus(OrderStatus),
    Advance(Transition),
    /// The total now stored.
    SetTotal(u64),
}

/// Outcome of a guarded transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The precondition held; carries the order as it is after the change.
    Applied(Order),
    /// The precondition failed and nothing was mutated; carries the current status.
    Rejected(OrderStatus),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }
}
