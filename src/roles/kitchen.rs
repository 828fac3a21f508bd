//! # Kitchen
//!
//! Background preparation. The kitchen never blocks its caller; readiness is
//! announced only through the event stream.

use crate::clients::{OrderClient, OrderHandle};
use crate::model::OrderStatus;
use crate::order_actor::OrderError;
use std::time::Duration;
use tracing::{debug, error, info_span, instrument, Instrument};

/// Prepares orders in the background.
#[derive(Clone)]
pub struct Kitchen {
    orders: OrderClient,
    preparation_delay: Duration,
}

impl Kitchen {
    pub fn new(orders: OrderClient, preparation_delay: Duration) -> Self {
        Self {
            orders,
            preparation_delay,
        }
    }

    pub fn preparation_delay(&self) -> Duration {
        self.preparation_delay
    }

    /// Moves the order to `InPreparation` now and schedules `Ready` after the
    /// preparation delay.
    ///
    /// Returns as soon as the first transition is stored. The `Ready` transition runs
    /// on a detached task; it cannot be cancelled and is only observable through its
    /// `status_changed` event.
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn prepare(&self, order: &OrderHandle) -> Result<(), OrderError> {
        let id = order.id();
        self.orders.set_status(id, OrderStatus::InPreparation).await?;

        let orders = self.orders.clone();
        let delay = self.preparation_delay;
        tokio::spawn(
            async move {
                tokio::time::sleep(delay).await;
                if let Err(e) = orders.set_status(id, OrderStatus::Ready).await {
                    error!(error = %e, "Could not mark order ready");
                }
            }
            .instrument(info_span!("preparation", order_id = %id)),
        );

        debug!(?delay, "Preparation scheduled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventBus, RestaurantEvent};
    use crate::framework::ResourceActor;
    use crate::model::{Order, OrderCreate, OrderId};

    async fn spawn_store(events: &EventBus) -> OrderClient {
        let (actor, client) = ResourceActor::<Order>::new(8);
        tokio::spawn(actor.run(events.clone()));
        OrderClient::new(client)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_fires_only_after_delay() {
        let events = EventBus::new(16);
        let mut rx = events.subscribe();
        let orders = spawn_store(&events).await;
        let id = orders
            .create_order(OrderCreate {
                customer_name: "Ana".into(),
                items: vec!["Sopa".into()],
            })
            .await
            .unwrap();
        let handle = OrderHandle::new(id, orders.clone());
        let kitchen = Kitchen::new(orders, Duration::from_millis(2000));
        assert_eq!(kitchen.preparation_delay(), Duration::from_millis(2000));

        kitchen.prepare(&handle).await.unwrap();
        assert_eq!(handle.status().await.unwrap(), OrderStatus::InPreparation);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(handle.status().await.unwrap(), OrderStatus::InPreparation);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(handle.status().await.unwrap(), OrderStatus::Ready);

        assert_eq!(
            rx.try_recv().unwrap(),
            RestaurantEvent::StatusChanged {
                order_id: id,
                from: OrderStatus::Requested,
                to: OrderStatus::InPreparation,
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            RestaurantEvent::StatusChanged {
                order_id: id,
                from: OrderStatus::InPreparation,
                to: OrderStatus::Ready,
            }
        );
    }

    #[tokio::test]
    async fn test_prepare_unknown_order_fails() {
        let events = EventBus::new(4);
        let orders = spawn_store(&events).await;
        let kitchen = Kitchen::new(orders.clone(), Duration::from_millis(10));

        let ghost = OrderHandle::new(OrderId(404), orders);
        assert_eq!(
            kitchen.prepare(&ghost).await,
            Err(OrderError::NotFound(OrderId(404)))
        );
    }
}
