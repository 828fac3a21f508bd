use super::RestaurantConfig;
use crate::clients::OrderClient;
use crate::events::{EventBus, RestaurantEvent};
use crate::framework::ActorClient;
use crate::model::{Order, OrderId};
use crate::order_actor::{self, OrderError};
use crate::roles::{Cashier, Customer, Kitchen, Waiter};
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// Composition root: one order actor, one waiter and one cashier for the whole run.
///
/// The restaurant does not own orders. Customers created here share the same waiter
/// and cashier.
///
/// # Example
///
/// ```ignore
/// let restaurant = Restaurant::new();
/// let juan = restaurant.new_customer("Juan");
/// let order = juan.place_order(restaurant.waiter(), ["Pizza", "Refresco"]).await?;
/// // ... wait for the kitchen ...
/// restaurant.waiter().serve_order(&order).await?;
/// juan.request_bill(restaurant.waiter(), &order).await?;
/// juan.pay(restaurant.cashier(), &order).await?;
/// restaurant.shutdown().await?;
/// ```
pub struct Restaurant {
    waiter: Waiter,
    cashier: Cashier,
    orders: OrderClient,
    events: EventBus,
    config: RestaurantConfig,
    handle: JoinHandle<()>,
}

impl Restaurant {
    /// Starts a restaurant with [`RestaurantConfig::default`]. Must be called inside a
    /// Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(RestaurantConfig::default())
    }

    pub fn with_config(config: RestaurantConfig) -> Self {
        let events = EventBus::new(config.event_capacity);

        let (order_actor, client) = order_actor::new(config.mailbox_capacity);
        let handle = tokio::spawn(order_actor.run(events.clone()));

        let orders = OrderClient::new(client);
        let kitchen = Kitchen::new(orders.clone(), config.preparation_delay);
        let cashier = Cashier::new(orders.clone(), events.clone(), config.unit_price);
        let waiter = Waiter::new(orders.clone(), kitchen, cashier.clone(), events.clone());

        info!(
            preparation_delay_ms = config.preparation_delay.as_millis() as u64,
            unit_price = config.unit_price,
            "Restaurant open"
        );

        Self {
            waiter,
            cashier,
            orders,
            events,
            config,
            handle,
        }
    }

    pub fn new_customer(&self, name: impl Into<String>) -> Customer {
        Customer::new(name)
    }

    pub fn waiter(&self) -> &Waiter {
        &self.waiter
    }

    pub fn cashier(&self) -> &Cashier {
        &self.cashier
    }

    pub fn config(&self) -> &RestaurantConfig {
        &self.config
    }

    /// Receives every event emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<RestaurantEvent> {
        self.events.subscribe()
    }

    /// Current state of an order, if it exists.
    pub async fn order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.orders.get(id).await
    }

    /// Closes the restaurant and waits for the order actor to stop.
    ///
    /// Scheduled preparations still fire before the actor exits. Every
    /// [`OrderHandle`](crate::clients::OrderHandle) also holds a client, so drop the
    /// handles first or this waits forever.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down restaurant...");

        drop(self.waiter);
        drop(self.cashier);
        drop(self.orders);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Order actor failed");
            return Err(e.into());
        }

        info!("Restaurant closed.");
        Ok(())
    }
}

impl Default for Restaurant {
    fn default() -> Self {
        Self::new()
    }
}
