//! Entity trait implementation for [`Order`].
//!
//! The order is a passive state holder: [`Order::set_status`] overwrites the status
//! unconditionally and reports the change. Preconditions belong to the roles that
//! request transitions; the only thing the entity offers them is
//! [`OrderAction::Advance`], which evaluates the caller's precondition and the
//! overwrite in the same actor turn.

use super::actions::{OrderAction, OrderActionResult, Transition};
use super::error::OrderError;
use crate::events::{EventBus, RestaurantEvent};
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use async_trait::async_trait;
use tracing::debug;

impl Order {
    /// Overwrites the status and emits `status_changed`. Performs no validation.
    /// Returns the previous status.
    pub fn set_status(&mut self, next: OrderStatus, events: &EventBus) -> OrderStatus {
        let previous = self.status;
        self.status = next;
        events.emit(RestaurantEvent::StatusChanged {
            order_id: self.id,
            from: previous,
            to: next,
        });
        previous
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = EventBus;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.customer_name, params.items))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        events: &EventBus,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::SetStatus(next) => {
                Ok(OrderActionResult::SetStatus(self.set_status(next, events)))
            }
            OrderAction::Advance { expected, next } => {
                if self.status != expected {
                    debug!(order_id = %self.id, current = %self.status, %expected, "Precondition failed");
                    return Ok(OrderActionResult::Advance(Transition::Rejected(self.status)));
                }
                self.set_status(next, events);
                Ok(OrderActionResult::Advance(Transition::Applied(self.clone())))
            }
            OrderAction::SetTotal(total) => {
                self.total = total;
                Ok(OrderActionResult::SetTotal(total))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        Order::new(OrderId(1), "Juan".into(), vec!["Pizza".into(), "Refresco".into()])
    }

    #[test]
    fn test_set_status_does_not_validate() {
        let events = EventBus::new(8);
        let mut rx = events.subscribe();
        let mut order = order();

        // Skipping straight to Paid is allowed at this level.
        let previous = order.set_status(OrderStatus::Paid, &events);

        assert_eq!(previous, OrderStatus::Requested);
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(
            rx.try_recv().unwrap(),
            RestaurantEvent::StatusChanged {
                order_id: OrderId(1),
                from: OrderStatus::Requested,
                to: OrderStatus::Paid,
            }
        );
    }

    #[tokio::test]
    async fn test_advance_rejects_without_mutation_or_event() {
        let events = EventBus::new(8);
        let mut rx = events.subscribe();
        let mut order = order();

        let result = order
            .handle_action(
                OrderAction::Advance {
                    expected: OrderStatus::Ready,
                    next: OrderStatus::Served,
                },
                &events,
            )
            .await
            .unwrap();

        assert!(matches!(
            result,
            OrderActionResult::Advance(Transition::Rejected(OrderStatus::Requested))
        ));
        assert_eq!(order.status, OrderStatus::Requested);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_advance_applies_when_precondition_holds() {
        let events = EventBus::new(8);
        let mut order = order();
        order.status = OrderStatus::Ready;

        let result = order
            .handle_action(
                OrderAction::Advance {
                    expected: OrderStatus::Ready,
                    next: OrderStatus::Served,
                },
                &events,
            )
            .await
            .unwrap();

        match result {
            OrderActionResult::Advance(Transition::Applied(snapshot)) => {
                assert_eq!(snapshot.status, OrderStatus::Served);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_set_total_overwrites() {
        let events = EventBus::new(8);
        let mut order = order();

        order
            .handle_action(OrderAction::SetTotal(20), &events)
            .await
            .unwrap();
        order
            .handle_action(OrderAction::SetTotal(20), &events)
            .await
            .unwrap();

        assert_eq!(order.total, 20);
    }
}
