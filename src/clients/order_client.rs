use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderError};

/// Client for interacting with the Order actor.
///
/// Stock deduction happens in the Order actor's `on_create` hook; this client
/// only shapes payloads and maps errors.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Persists a new order and returns its generated id.
    #[instrument(skip(self, order))]
    pub async fn place_order(&self, order: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(user_id = %order.user_id, items = order.items.len(), "Sending request");
        self.inner.create(order).await.map_err(|e| match e {
            FrameworkError::Custom(msg) => OrderError::ValidationError(msg),
            other => OrderError::ActorCommunicationError(other.to_string()),
        })
    }

    /// Advances an order's status. Regressions are ignored by the entity, so
    /// the returned order carries the effective (possibly unchanged) status.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::SetStatus(status))
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(id) => OrderError::NotFound(id),
                other => OrderError::ActorCommunicationError(other.to_string()),
            })
    }
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
