//! # Catalog Client
//!
//! High-level API for the catalog actor. Wraps a `StateClient<Catalog>`.
use crate::catalog::{Catalog, CatalogCommand, CatalogError, CatalogReply};
use crate::model::{Product, ProductId};
use actor_framework::{FrameworkError, StateClient};
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: StateClient<Catalog>,
}

impl CatalogClient {
    pub fn new(inner: StateClient<Catalog>) -> Self {
        Self { inner }
    }

    fn map_error(e: FrameworkError) -> CatalogError {
        e.downcast_entity::<CatalogError>()
            .unwrap_or_else(|e| CatalogError::ActorCommunication(e.to_string()))
    }

    async fn products(&self, command: CatalogCommand) -> Result<Vec<Product>, CatalogError> {
        match self.inner.send(command).await.map_err(Self::map_error)? {
            CatalogReply::Products(products) => Ok(products),
            _ => unreachable!("Invalid reply type"),
        }
    }

    /// Fetches the product list from the source. Succeeds at most once.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending request");
        self.products(CatalogCommand::Load).await
    }

    /// Shows the products whose title contains `query`, ignoring case.
    #[instrument(skip(self))]
    pub async fn filter(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending request");
        self.products(CatalogCommand::Filter(query.to_string())).await
    }

    pub async fn reset(&self) -> Result<Vec<Product>, CatalogError> {
        self.products(CatalogCommand::Reset).await
    }

    pub async fn display(&self) -> Result<Vec<Product>, CatalogError> {
        self.products(CatalogCommand::Display).await
    }

    pub async fn find(&self, id: ProductId) -> Result<Product, CatalogError> {
        match self
            .inner
            .send(CatalogCommand::Find(id))
            .await
            .map_err(Self::map_error)?
        {
            CatalogReply::Product(product) => Ok(product),
            _ => unreachable!("Invalid reply type"),
        }
    }
}
