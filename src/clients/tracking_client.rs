use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{OrderId, OrderStatus};
use crate::tracking_actor::{TrackingAction, TrackingCreate, TrackingError, TrackingRecord};

/// Client for interacting with the tracking actor.
///
/// Records are keyed by order id, so every method takes the order's id rather
/// than a tracking-specific one.
#[derive(Clone)]
pub struct TrackingClient {
    inner: ResourceClient<TrackingRecord>,
}

impl TrackingClient {
    pub fn new(inner: ResourceClient<TrackingRecord>) -> Self {
        Self { inner }
    }

    /// Initializes tracking for a freshly placed order.
    ///
    /// Exactly one record may exist per order; a second create for the same
    /// order id is rejected with [`TrackingError::AlreadyTracked`].
    #[instrument(skip(self, params))]
    pub async fn create_tracking(&self, params: TrackingCreate) -> Result<OrderId, TrackingError> {
        debug!(order_id = %params.order_id, city = %params.destination_city, "Sending request");
        self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Duplicate(id) => TrackingError::AlreadyTracked(id),
            other => TrackingError::ActorCommunicationError(other.to_string()),
        })
    }

    /// Re-derives the record from elapsed time and returns the updated state,
    /// or `None` when the order has no tracking record.
    #[instrument(skip(self))]
    pub async fn refresh(
        &self,
        order_id: OrderId,
        now: DateTime<Utc>,
    ) -> Result<Option<TrackingRecord>, TrackingError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(order_id, TrackingAction::Refresh { now })
            .await
        {
            Ok(record) => Ok(Some(record)),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(TrackingError::ActorCommunicationError(e.to_string())),
        }
    }

    /// Manually advances the tracking status (admin override). Regressions
    /// are ignored; the returned record carries the effective status.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<TrackingRecord, TrackingError> {
        debug!("Sending request");
        self.inner
            .perform_action(order_id, TrackingAction::SetStatus { status, now })
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(id) => TrackingError::NotFound(id),
                other => TrackingError::ActorCommunicationError(other.to_string()),
            })
    }
}

#[async_trait]
impl ActorClient<TrackingRecord> for TrackingClient {
    type Error = TrackingError;

    fn inner(&self) -> &ResourceClient<TrackingRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        TrackingError::ActorCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{expect_action, expect_create, mock_client};

    #[tokio::test]
    async fn refresh_on_untracked_order_yields_none() {
        let (inner, mut rx) = mock_client::<TrackingRecord>(8);
        let client = TrackingClient::new(inner);

        let request = tokio::spawn({
            let client = client.clone();
            async move { client.refresh("ORD-AAAAAA".into(), Utc::now()).await }
        });

        let (id, action, respond_to) = expect_action(&mut rx).await.unwrap();
        assert_eq!(id, OrderId::from("ORD-AAAAAA"));
        assert!(matches!(action, TrackingAction::Refresh { .. }));
        respond_to
            .send(Err(FrameworkError::NotFound("ORD-AAAAAA".to_string())))
            .unwrap();

        assert_eq!(request.await.unwrap().unwrap(), None);
    }

    #[tokio::test]
    async fn list_yields_every_stored_record() {
        let (inner, mut rx) = mock_client::<TrackingRecord>(8);
        let client = TrackingClient::new(inner);

        let request = tokio::spawn({
            let client = client.clone();
            async move { client.list().await }
        });

        let respond_to = crate::framework::mock::expect_list(&mut rx).await.unwrap();
        respond_to.send(Ok(Vec::new())).unwrap();

        assert_eq!(request.await.unwrap().unwrap(), Vec::new());
    }

    #[tokio::test]
    async fn duplicate_create_maps_to_already_tracked() {
        let (inner, mut rx) = mock_client::<TrackingRecord>(8);
        let client = TrackingClient::new(inner);

        let request = tokio::spawn({
            let client = client.clone();
            async move {
                client
                    .create_tracking(TrackingCreate {
                        order_id: "ORD-BBBBBB".into(),
                        placed_at: Utc::now(),
                        destination_city: "Kolkata".to_string(),
                    })
                    .await
            }
        });

        let (params, respond_to) = expect_create(&mut rx).await.unwrap();
        assert_eq!(params.order_id, OrderId::from("ORD-BBBBBB"));
        respond_to
            .send(Err(FrameworkError::Duplicate("ORD-BBBBBB".to_string())))
            .unwrap();

        let err = request.await.unwrap().unwrap_err();
        assert_eq!(err, TrackingError::AlreadyTracked("ORD-BBBBBB".to_string()));
    }
}
