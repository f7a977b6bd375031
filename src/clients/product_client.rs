use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Adds a product to the catalog and returns its generated id.
    #[instrument(skip(self, product))]
    pub async fn create_product(&self, product: ProductCreate) -> Result<ProductId, ProductError> {
        debug!(name = %product.name, "Sending request");
        self.inner
            .create(product)
            .await
            .map_err(|e| ProductError::ActorCommunicationError(e.to_string()))
    }

    /// Admin upsert of name, price and/or stock.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(|e| match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        })
    }

    /// Reads the current stock level without modifying it.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<i64, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
        {
            Ok(ProductActionResult::CheckStock(stock)) => Ok(stock),
            Ok(other) => Err(ProductError::ActorCommunicationError(format!(
                "unexpected action result: {other:?}"
            ))),
            Err(FrameworkError::NotFound(id)) => Err(ProductError::NotFound(id)),
            Err(e) => Err(ProductError::ActorCommunicationError(e.to_string())),
        }
    }

    /// Deducts `quantity` units and returns the remaining stock, which may be
    /// negative. There is no oversell guard.
    #[instrument(skip(self))]
    pub async fn deduct_stock(&self, id: ProductId, quantity: u32) -> Result<i64, ProductError> {
        debug!(quantity, "Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::DeductStock(quantity))
            .await
        {
            Ok(ProductActionResult::DeductStock(remaining)) => Ok(remaining),
            Ok(other) => Err(ProductError::ActorCommunicationError(format!(
                "unexpected action result: {other:?}"
            ))),
            Err(FrameworkError::NotFound(id)) => Err(ProductError::NotFound(id)),
            Err(e) => Err(ProductError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::ActorCommunicationError(e.to_string())
    }
}
