//! # Cashier
//!
//! Owns the money side of an order: the bill total and the final `Served -> Paid`
//! transition.

use crate::clients::{OrderClient, OrderHandle};
use crate::events::{EventBus, RestaurantEvent};
use crate::model::OrderStatus;
use crate::order_actor::{OrderError, Transition};
use tracing::{info, instrument};

/// Computes totals and takes payment.
#[derive(Clone)]
pub struct Cashier {
    orders: OrderClient,
    events: EventBus,
    unit_price: u64,
}

impl Cashier {
    pub fn new(orders: OrderClient, events: EventBus, unit_price: u64) -> Self {
        Self {
            orders,
            events,
            unit_price,
        }
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// `total = items * unit_price`, stored on the order. Valid in any status and safe
    /// to repeat. A product that does not fit in a `u64` saturates at `u64::MAX`.
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn compute_total(&self, order: &OrderHandle) -> Result<u64, OrderError> {
        let id = order.id();
        let items = self.orders.fetch(id).await?.items.len() as u64;
        let total = self.orders.set_total(id, items.saturating_mul(self.unit_price)).await?;
        self.events.emit(RestaurantEvent::TotalComputed { order_id: id, total });
        Ok(total)
    }

    /// Marks a `Served` order as `Paid`. Any other status is a soft no-op that emits
    /// `payment_rejected`.
    ///
    /// A served order that was never billed gets its total computed first, so a paid
    /// order always carries its total.
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn process_payment(&self, order: &OrderHandle) -> Result<Transition, OrderError> {
        let id = order.id();
        let current = self.orders.fetch(id).await?;
        if current.status == OrderStatus::Served && current.total == 0 && !current.items.is_empty() {
            info!("Order was never billed, computing total before payment");
            self.compute_total(order).await?;
        }

        let transition = self
            .orders
            .advance(id, OrderStatus::Served, OrderStatus::Paid)
            .await?;
        match &transition {
            Transition::Applied(paid) => self.events.emit(RestaurantEvent::PaymentProcessed {
                order_id: id,
                total: paid.total,
            }),
            Transition::Rejected(status) => self.events.emit(RestaurantEvent::PaymentRejected {
                order_id: id,
                status: *status,
            }),
        }
        Ok(transition)
    }
}
