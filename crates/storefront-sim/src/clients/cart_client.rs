//! # Cart Client
//!
//! High-level API for the cart. Wraps a `ResourceClient<CartLine>`; callers deal in
//! products and never see line records unless they ask for them.
use crate::cart_actor::CartError;
use crate::model::{cart_total, CartLine, CartLineId, Product};
use actor_framework::ActorClient;
use actor_framework::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartLine>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartLine>) -> Self {
        Self { inner }
    }

    /// Appends a copy of `product`.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add(&self, product: Product) -> Result<CartLineId, CartError> {
        debug!("Sending request");
        self.inner.create(product).await.map_err(Self::map_error)
    }

    /// Products in the order they were added.
    pub async fn items(&self) -> Result<Vec<Product>, CartError> {
        Ok(self.list().await?.into_iter().map(|line| line.product).collect())
    }

    pub async fn size(&self) -> Result<usize, CartError> {
        self.len().await
    }

    pub async fn total(&self) -> Result<Decimal, CartError> {
        Ok(cart_total(&self.items().await?))
    }

    /// Empties the cart, returning how many lines were removed.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, CartError> {
        debug!("Sending request");
        let removed = self.inner.clear().await.map_err(Self::map_error)?;
        info!(removed, "Cart cleared");
        Ok(removed)
    }
}

#[async_trait]
impl ActorClient<CartLine> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartLine> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<CartError>()
            .unwrap_or_else(|e| CartError::ActorCommunication(e.to_string()))
    }
}
