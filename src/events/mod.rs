//! # Event Stream
//!
//! The only observable surface of the simulation. Every role reports what it did by
//! emitting a [`RestaurantEvent`] on the shared [`EventBus`]; nothing is printed directly.
//!
//! Each event is also logged through `tracing`, so `RUST_LOG=info` narrates the run
//! while tests subscribe to the bus and assert on the exact sequence.

use crate::model::{OrderId, OrderStatus};
use serde::Serialize;
use std::fmt::Display;
use tokio::sync::broadcast;
use tracing::info;

/// Something that happened to an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RestaurantEvent {
    OrderRequested {
        order_id: OrderId,
        customer_name: String,
        items: Vec<String>,
    },
    StatusChanged {
        order_id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },
    OrderNotReady {
        order_id: OrderId,
        status: OrderStatus,
    },
    BillRequested {
        order_id: OrderId,
    },
    TotalComputed {
        order_id: OrderId,
        total: u64,
    },
    PaymentRejected {
        order_id: OrderId,
        status: OrderStatus,
    },
    PaymentProcessed {
        order_id: OrderId,
        total: u64,
    },
}

impl RestaurantEvent {
    pub fn order_id(&self) -> OrderId {
        match self {
            RestaurantEvent::OrderRequested { order_id, .. }
            | RestaurantEvent::StatusChanged { order_id, .. }
            | RestaurantEvent::OrderNotReady { order_id, .. }
            | RestaurantEvent::BillRequested { order_id }
            | RestaurantEvent::TotalComputed { order_id, .. }
            | RestaurantEvent::PaymentRejected { order_id, .. }
            | RestaurantEvent::PaymentProcessed { order_id, .. } => *order_id,
        }
    }

    /// Internally tagged JSON, e.g. `{"event":"bill_requested","order_id":1}`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Display for RestaurantEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestaurantEvent::OrderRequested {
                order_id,
                customer_name,
                items,
            } => write!(
                f,
                "{customer_name} requests {order_id}: {}",
                items.join(", ")
            ),
            RestaurantEvent::StatusChanged { order_id, from, to } => {
                write!(f, "{order_id} changed from {from} to {to}")
            }
            RestaurantEvent::OrderNotReady { order_id, status } => {
                write!(f, "{order_id} is not ready to serve ({status})")
            }
            RestaurantEvent::BillRequested { order_id } => {
                write!(f, "bill requested for {order_id}")
            }
            RestaurantEvent::TotalComputed { order_id, total } => {
                write!(f, "total for {order_id} is ${total}")
            }
            RestaurantEvent::PaymentRejected { order_id, status } => {
                write!(f, "{order_id} cannot be paid before it is served ({status})")
            }
            RestaurantEvent::PaymentProcessed { order_id, total } => {
                write!(f, "{order_id} paid: ${total}")
            }
        }
    }
}

/// Broadcast channel shared by every role and by the order actor.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<RestaurantEvent>,
}

impl EventBus {
    /// `capacity` bounds how far a slow subscriber may lag before it starts
    /// missing events.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RestaurantEvent> {
        self.sender.subscribe()
    }

    /// Logs the event and hands it to every current subscriber.
    /// Having no subscribers is fine.
    pub fn emit(&self, event: RestaurantEvent) {
        info!(order_id = %event.order_id(), "{}", event);
        let _ = self.sender.send(event);
    }
}
