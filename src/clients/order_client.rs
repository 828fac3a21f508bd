//! # Order Client
//!
//! Provides a high-level API for the order actor. It wraps a `ResourceClient<Order>`
//! and turns the generic action results back into domain values.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError, Transition};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::ActorCommunicationError(e.to_string())
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Unconditional overwrite. Returns the previous status.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, next: OrderStatus) -> Result<OrderStatus, OrderError> {
        match self.action(id, OrderAction::SetStatus(next)).await? {
            OrderActionResult::SetStatus(previous) => Ok(previous),
            other => Err(unexpected(other)),
        }
    }

    /// Compare-and-set transition, evaluated inside the actor.
    #[instrument(skip(self))]
    pub async fn advance(
        &self,
        id: OrderId,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> Result<Transition, OrderError> {
        match self.action(id, OrderAction::Advance { expected, next }).await? {
            OrderActionResult::Advance(transition) => Ok(transition),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_total(&self, id: OrderId, total: u64) -> Result<u64, OrderError> {
        match self.action(id, OrderAction::SetTotal(total)).await? {
            OrderActionResult::SetTotal(stored) => Ok(stored),
            other => Err(unexpected(other)),
        }
    }

    /// Like [`ActorClient::get`], but a missing order is an error.
    pub async fn fetch(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id).await?.ok_or(OrderError::NotFound(id))
    }

    async fn action(&self, id: OrderId, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => OrderError::NotFound(id),
                other => Self::map_error(other),
            })
    }
}

fn unexpected(result: OrderActionResult) -> OrderError {
    OrderError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}
