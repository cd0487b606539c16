//! [`ActorState`] implementation for [`Catalog`].

use super::{CatalogError, CatalogSource};
use crate::model::{Product, ProductId};
use actor_framework::ActorState;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// The fetched product list and the list currently on display.
///
/// `original` is written once by a successful load and never changes afterwards.
/// `display` is always a subset of it, in the same order.
#[derive(Debug, Default)]
pub struct Catalog {
    original: Option<Vec<Product>>,
    display: Vec<Product>,
}

#[derive(Debug)]
pub enum CatalogCommand {
    Load,
    Filter(String),
    Reset,
    Display,
    Find(ProductId),
}

#[derive(Debug, Clone)]
pub enum CatalogReply {
    Products(Vec<Product>),
    Product(Product),
}

impl Catalog {
    fn loaded(&self) -> Result<&[Product], CatalogError> {
        self.original.as_deref().ok_or(CatalogError::NotLoaded)
    }
}

#[async_trait]
impl ActorState for Catalog {
    type Command = CatalogCommand;
    type Reply = CatalogReply;
    type Context = Arc<dyn CatalogSource>;
    type Error = CatalogError;

    async fn handle(
        &mut self,
        command: CatalogCommand,
        source: &Arc<dyn CatalogSource>,
    ) -> Result<CatalogReply, CatalogError> {
        match command {
            CatalogCommand::Load => {
                if self.original.is_some() {
                    return Err(CatalogError::AlreadyLoaded);
                }
                match source.fetch().await {
                    Ok(products) => {
                        info!(count = products.len(), source = %source.describe(), "Catalog loaded");
                        self.display = products.clone();
                        self.original = Some(products);
                        Ok(CatalogReply::Products(self.display.clone()))
                    }
                    Err(e) => {
                        warn!(source = %source.describe(), error = %e, "Catalog fetch failed");
                        self.display.clear();
                        Err(e.into())
                    }
                }
            }
            CatalogCommand::Filter(query) => {
                let matches: Vec<Product> = self
                    .loaded()?
                    .iter()
                    .filter(|p| p.title_matches(&query))
                    .cloned()
                    .collect();
                self.display = matches;
                Ok(CatalogReply::Products(self.display.clone()))
            }
            CatalogCommand::Reset => {
                self.display = self.loaded()?.to_vec();
                Ok(CatalogReply::Products(self.display.clone()))
            }
            CatalogCommand::Display => Ok(CatalogReply::Products(self.display.clone())),
            CatalogCommand::Find(id) => self
                .loaded()?
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .map(CatalogReply::Product)
                .ok_or(CatalogError::ProductNotFound(id)),
        }
    }
}
