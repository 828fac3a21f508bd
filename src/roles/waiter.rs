//! # Waiter
//!
//! Front of house: intake, serving and bill requests. The waiter is the only role
//! that creates orders.

use super::{Cashier, Kitchen};
use crate::clients::{OrderClient, OrderHandle};
use crate::events::{EventBus, RestaurantEvent};
use crate::model::{OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderError, Transition};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

/// Takes orders, hands them to the kitchen, serves them and relays bill requests.
///
/// Cloning shares the same intake list, so one waiter can serve many customers
/// from different tasks.
#[derive(Clone)]
pub struct Waiter {
    orders: OrderClient,
    kitchen: Kitchen,
    cashier: Cashier,
    events: EventBus,
    taken: Arc<Mutex<Vec<OrderId>>>,
}

impl Waiter {
    pub fn new(orders: OrderClient, kitchen: Kitchen, cashier: Cashier, events: EventBus) -> Self {
        Self {
            orders,
            kitchen,
            cashier,
            events,
            taken: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates the order, records it and sends it to the kitchen.
    ///
    /// Returns once the order is `InPreparation`; it becomes `Ready` later, on its own.
    #[instrument(skip(self, items))]
    pub async fn take_order(
        &self,
        customer_name: &str,
        items: Vec<String>,
    ) -> Result<OrderHandle, OrderError> {
        let params = OrderCreate {
            customer_name: customer_name.to_string(),
            items: items.clone(),
        };
        let id = self.orders.create_order(params).await?;
        self.taken.lock().await.push(id);

        self.events.emit(RestaurantEvent::OrderRequested {
            order_id: id,
            customer_name: customer_name.to_string(),
            items,
        });

        let order = OrderHandle::new(id, self.orders.clone());
        self.kitchen.prepare(&order).await?;
        Ok(order)
    }

    /// Serves a `Ready` order. Any other status is a soft no-op that emits
    /// `order_not_ready`.
    ///
    /// A successful serve is announced by the order itself as
    /// `status_changed(Ready -> Served)`; the waiter adds no event of its own.
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn serve_order(&self, order: &OrderHandle) -> Result<Transition, OrderError> {
        let id = order.id();
        let transition = self
            .orders
            .advance(id, OrderStatus::Ready, OrderStatus::Served)
            .await?;
        match &transition {
            Transition::Applied(served) => {
                info!(customer = %served.customer_name, "Order served")
            }
            Transition::Rejected(status) => self.events.emit(RestaurantEvent::OrderNotReady {
                order_id: id,
                status: *status,
            }),
        }
        Ok(transition)
    }

    /// Asks the cashier for the total. No status precondition: an order that was
    /// never served can still be billed.
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn request_bill(&self, order: &OrderHandle) -> Result<u64, OrderError> {
        self.events.emit(RestaurantEvent::BillRequested {
            order_id: order.id(),
        });
        self.cashier.compute_total(order).await
    }

    /// Every order this waiter has taken, in intake order.
    pub async fn taken_orders(&self) -> Vec<OrderId> {
        self.taken.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::ResourceActor;
    use crate::model::Order;
    use std::time::Duration;

    const PREP: Duration = Duration::from_millis(2000);

    fn staff(events: &EventBus) -> Waiter {
        let (actor, client) = ResourceActor::<Order>::new(16);
        tokio::spawn(actor.run(events.clone()));
        let orders = OrderClient::new(client);
        let kitchen = Kitchen::new(orders.clone(), PREP);
        let cashier = Cashier::new(orders.clone(), events.clone(), 10);
        Waiter::new(orders, kitchen, cashier, events.clone())
    }

    fn drain(rx: &mut tokio::sync::broadcast::Receiver<RestaurantEvent>) -> Vec<RestaurantEvent> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_take_order_returns_before_ready() {
        let events = EventBus::new(32);
        let mut rx = events.subscribe();
        let waiter = staff(&events);

        let order = waiter
            .take_order("Juan", vec!["Pizza".into(), "Refresco".into()])
            .await
            .unwrap();

        assert_eq!(order.status().await.unwrap(), OrderStatus::InPreparation);
        assert_eq!(
            drain(&mut rx),
            vec![
                RestaurantEvent::OrderRequested {
                    order_id: order.id(),
                    customer_name: "Juan".into(),
                    items: vec!["Pizza".into(), "Refresco".into()],
                },
                RestaurantEvent::StatusChanged {
                    order_id: order.id(),
                    from: OrderStatus::Requested,
                    to: OrderStatus::InPreparation,
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_serve_before_ready_is_soft_noop() {
        let events = EventBus::new(32);
        let waiter = staff(&events);
        let order = waiter.take_order("Juan", vec!["Pizza".into()]).await.unwrap();
        let mut rx = events.subscribe();

        let transition = waiter.serve_order(&order).await.unwrap();

        assert_eq!(transition, Transition::Rejected(OrderStatus::InPreparation));
        assert_eq!(order.status().await.unwrap(), OrderStatus::InPreparation);
        assert_eq!(
            drain(&mut rx),
            vec![RestaurantEvent::OrderNotReady {
                order_id: order.id(),
                status: OrderStatus::InPreparation,
            }]
        );

        // Retrying once the kitchen is done succeeds.
        tokio::time::sleep(PREP + Duration::from_millis(1)).await;
        assert!(waiter.serve_order(&order).await.unwrap().is_applied());
        assert_eq!(order.status().await.unwrap(), OrderStatus::Served);
    }

    #[tokio::test(start_paused = true)]
    async fn test_serve_when_ready_emits_single_transition() {
        let events = EventBus::new(32);
        let waiter = staff(&events);
        let order = waiter.take_order("Juan", vec!["Pizza".into()]).await.unwrap();
        tokio::time::sleep(PREP + Duration::from_millis(1)).await;
        let mut rx = events.subscribe();

        waiter.serve_order(&order).await.unwrap();

        assert_eq!(
            drain(&mut rx),
            vec![RestaurantEvent::StatusChanged {
                order_id: order.id(),
                from: OrderStatus::Ready,
                to: OrderStatus::Served,
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_bill_can_be_requested_before_serving() {
        let events = EventBus::new(32);
        let waiter = staff(&events);
        let order = waiter
            .take_order("Juan", vec!["Pizza".into(), "Refresco".into()])
            .await
            .unwrap();
        let mut rx = events.subscribe();

        let total = waiter.request_bill(&order).await.unwrap();

        assert_eq!(total, 20);
        let snapshot = order.snapshot().await.unwrap();
        assert_eq!(snapshot.total, 20);
        assert_eq!(snapshot.status, OrderStatus::InPreparation);
        assert_eq!(
            drain(&mut rx),
            vec![
                RestaurantEvent::BillRequested {
                    order_id: order.id()
                },
                RestaurantEvent::TotalComputed {
                    order_id: order.id(),
                    total: 20
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_intake_list_is_append_only_and_shared_between_clones() {
        let events = EventBus::new(32);
        let waiter = staff(&events);
        let other = waiter.clone();

        let first = waiter.take_order("Juan", vec!["Pizza".into()]).await.unwrap();
        let second = other.take_order("Ana", vec!["Sopa".into()]).await.unwrap();

        assert_eq!(waiter.taken_orders().await, vec![first.id(), second.id()]);
        assert!(first.id() < second.id());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_order_totals_zero() {
        let events = EventBus::new(32);
        let waiter = staff(&events);
        let order = waiter.take_order("Nadie", Vec::new()).await.unwrap();

        assert_eq!(waiter.request_bill(&order).await.unwrap(), 0);
    }
}
