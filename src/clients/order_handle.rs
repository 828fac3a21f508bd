//! # Order Handle
//!
//! What a customer holds after placing an order. Cloning the handle never copies the
//! order; every clone points at the same instance inside the order actor.

use crate::clients::OrderClient;
use crate::model::{Order, OrderId, OrderStatus};
use crate::order_actor::OrderError;

#[derive(Clone)]
pub struct OrderHandle {
    id: OrderId,
    orders: OrderClient,
}

impl OrderHandle {
    pub fn new(id: OrderId, orders: OrderClient) -> Self {
        Self { id, orders }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// A copy of the order as it is right now.
    pub async fn snapshot(&self) -> Result<Order, OrderError> {
        self.orders.fetch(self.id).await
    }

    pub async fn status(&self) -> Result<OrderStatus, OrderError> {
        Ok(self.snapshot().await?.status)
    }
}

impl std::fmt::Debug for OrderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("OrderHandle").field(&self.id).finish()
    }
}
