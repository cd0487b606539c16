//! # Catalog
//!
//! Holds the product list fetched at startup and the (possibly filtered) list on display.
//! The catalog actor receives its [`CatalogSource`] as run context, so the fetch itself
//! happens inside the actor and any catalog request queued behind a pending load waits
//! for it.
//!
//! ## Structure
//!
//! - [`state`] - the [`Catalog`] state machine
//! - [`source`] - HTTP, file and in-memory sources
//! - [`error`] - [`CatalogError`] and [`FetchError`]

pub mod error;
pub mod source;
pub mod state;

pub use error::*;
pub use source::*;
pub use state::*;

use crate::clients::CatalogClient;
use actor_framework::StateActor;

/// Creates a new catalog actor and its client.
pub fn new(buffer_size: usize) -> (StateActor<Catalog>, CatalogClient) {
    let (actor, generic_client) = StateActor::new(Catalog::default(), buffer_size);
    (actor, CatalogClient::new(generic_client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn shoe_and_hat() -> Vec<Product> {
        vec![
            Product::new(1, "Red Shoe", Decimal::new(10, 0), "shoe.png"),
            Product::new(2, "Blue Hat", Decimal::new(5, 0), "hat.png"),
        ]
    }

    fn start(source: Arc<dyn CatalogSource>) -> CatalogClient {
        let (actor, client) = new(8);
        tokio::spawn(actor.run(source));
        client
    }

    /// Fails the first fetch, then serves the list.
    struct FlakySource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogSource for FlakySource {
        async fn fetch(&self) -> Result<Vec<Product>, FetchError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(FetchError::Status(503))
            } else {
                Ok(shoe_and_hat())
            }
        }

        fn describe(&self) -> String {
            "flaky".into()
        }
    }

    #[tokio::test]
    async fn filter_then_reset_restores_original_order() {
        let catalog = start(Arc::new(StaticCatalogSource::new(shoe_and_hat())));
        catalog.load().await.unwrap();

        let hats = catalog.filter("hat").await.unwrap();
        assert_eq!(hats.len(), 1);
        assert_eq!(hats[0].id, ProductId(2));
        assert_eq!(catalog.display().await.unwrap(), hats);

        assert_eq!(catalog.reset().await.unwrap(), shoe_and_hat());
    }

    #[tokio::test]
    async fn filter_always_works_from_the_full_list() {
        let catalog = start(Arc::new(StaticCatalogSource::new(shoe_and_hat())));
        catalog.load().await.unwrap();

        assert!(catalog.filter("hat").await.unwrap().len() == 1);
        // A second filter is not narrowed by the first
        assert_eq!(catalog.filter("SHOE").await.unwrap()[0].id, ProductId(1));
        assert!(catalog.filter("sock").await.unwrap().is_empty());
        assert_eq!(catalog.filter("").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn operations_before_load_report_not_loaded() {
        let catalog = start(Arc::new(StaticCatalogSource::new(shoe_and_hat())));

        assert_eq!(catalog.filter("hat").await, Err(CatalogError::NotLoaded));
        assert_eq!(catalog.reset().await, Err(CatalogError::NotLoaded));
        assert_eq!(catalog.find(ProductId(1)).await, Err(CatalogError::NotLoaded));
        assert!(catalog.display().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_load_leaves_catalog_empty_and_can_be_retried() {
        let catalog = start(Arc::new(FlakySource {
            calls: AtomicUsize::new(0),
        }));

        assert_eq!(
            catalog.load().await,
            Err(CatalogError::Fetch(FetchError::Status(503)))
        );
        assert!(catalog.display().await.unwrap().is_empty());

        assert_eq!(catalog.load().await.unwrap().len(), 2);
        assert_eq!(catalog.load().await, Err(CatalogError::AlreadyLoaded));
    }

    #[tokio::test]
    async fn find_looks_past_the_active_filter() {
        let catalog = start(Arc::new(StaticCatalogSource::new(shoe_and_hat())));
        catalog.load().await.unwrap();
        catalog.filter("hat").await.unwrap();

        assert_eq!(catalog.find(ProductId(1)).await.unwrap().title, "Red Shoe");
        assert_eq!(
            catalog.find(ProductId(9)).await,
            Err(CatalogError::ProductNotFound(ProductId(9)))
        );
    }
}
