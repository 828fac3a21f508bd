//! The guest side of the lifecycle.

use super::{Cashier, Waiter};
use crate::clients::OrderHandle;
use crate::order_actor::{OrderError, Transition};
use tracing::{info, instrument};

/// A named guest. Holds no state besides the name; every call delegates.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip_all, fields(customer = %self.name))]
    pub async fn place_order<I, S>(&self, waiter: &Waiter, items: I) -> Result<OrderHandle, OrderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        info!(items = %items.join(", "), "Placing order");
        waiter.take_order(&self.name, items).await
    }

    #[instrument(skip_all, fields(customer = %self.name, order_id = %order.id()))]
    pub async fn request_bill(&self, waiter: &Waiter, order: &OrderHandle) -> Result<u64, OrderError> {
        info!("Asking for the bill");
        waiter.request_bill(order).await
    }

    #[instrument(skip_all, fields(customer = %self.name, order_id = %order.id()))]
    pub async fn pay(&self, cashier: &Cashier, order: &OrderHandle) -> Result<Transition, OrderError> {
        info!("Paying");
        cashier.process_payment(order).await
    }
}
