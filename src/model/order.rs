//! The unit of work tracked through the five-state lifecycle.
//!
//! # Actor Framework
//! `Order` implements [`ActorEntity`](crate::framework::ActorEntity) (see
//! [`order_actor::entity`](crate::order_actor::entity)), so the one stored instance
//! lives inside the order actor and every role reaches it through an
//! [`OrderHandle`](crate::clients::OrderHandle).

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier minted by the order actor's monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle states. The only legal path is
/// `Requested -> InPreparation -> Ready -> Served -> Paid`; `Paid` is terminal.
///
/// Nothing in this type enforces that path. Callers state their own precondition
/// when they ask for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Requested,
    InPreparation,
    Ready,
    Served,
    Paid,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Requested => "requested",
            OrderStatus::InPreparation => "in preparation",
            OrderStatus::Ready => "ready",
            OrderStatus::Served => "served",
            OrderStatus::Paid => "paid",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    /// Detail lines, fixed at creation.
    pub items: Vec<String>,
    /// Zero until the cashier computes it.
    pub total: u64,
    pub status: OrderStatus,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_name: String,
    pub items: Vec<String>,
}

impl Order {
    /// Creates a new order in `Requested` with a zero total.
    pub fn new(id: OrderId, customer_name: String, items: Vec<String>) -> Self {
        Self {
            id,
            customer_name,
            items,
            total: 0,
            status: OrderStatus::Requested,
        }
    }
}
