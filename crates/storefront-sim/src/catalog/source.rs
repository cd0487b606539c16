//! Where the product list comes from.
//!
//! The storefront fetches its catalog exactly once, from an HTTP endpoint or a local JSON
//! file with the same shape: an array of `{id, title, price, image, ...}` objects.

use super::FetchError;
use crate::model::Product;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// A one-shot provider of the full product list.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Product>, FetchError>;

    /// Human-readable location, for logs and notices.
    fn describe(&self) -> String;
}

/// Picks the source for a location string: `http://` and `https://` locations are fetched
/// with a single GET, anything else is read as a file path.
pub fn source_from_location(
    location: &str,
    timeout: Duration,
) -> Result<Arc<dyn CatalogSource>, FetchError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        let url = Url::parse(location)
            .map_err(|e| FetchError::InvalidLocation(format!("{location}: {e}")))?;
        Ok(Arc::new(HttpCatalogSource::new(url, timeout)?))
    } else if location.trim().is_empty() {
        Err(FetchError::InvalidLocation("empty location".to_string()))
    } else {
        Ok(Arc::new(FileCatalogSource::new(location)))
    }
}

fn parse_products(body: &str) -> Result<Vec<Product>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))
}

/// Unauthenticated GET against a fixed URL. No pagination, no retry.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpCatalogSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        debug!("Fetching catalog");
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;
        parse_products(&body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// A local JSON file.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        debug!(path = %self.path.display(), "Reading catalog");
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FetchError::Unreachable(format!("{}: {e}", self.path.display())))?;
        parse_products(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A fixed list held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products: Vec<Product>,
}

impl StaticCatalogSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} products)", self.products.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("storefront-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn file_source_reads_product_array() {
        let path = temp_file("ok.json");
        tokio::fs::write(
            &path,
            r#"[{"id": 1, "title": "Red Shoe", "price": 10, "image": "a.png", "category": "x"}]"#,
        )
        .await
        .unwrap();

        let products = FileCatalogSource::new(&path).fetch().await.unwrap();
        assert_eq!(products, vec![Product::new(1, "Red Shoe", Decimal::new(10, 0), "a.png")]);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn file_source_rejects_malformed_payload() {
        let path = temp_file("bad.json");
        tokio::fs::write(&path, r#"{"products": []}"#).await.unwrap();

        let result = FileCatalogSource::new(&path).fetch().await;
        assert!(matches!(result, Err(FetchError::Malformed(_))));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_unreachable() {
        let result = FileCatalogSource::new(temp_file("missing.json")).fetch().await;
        assert!(matches!(result, Err(FetchError::Unreachable(_))));
    }

    #[tokio::test]
    async fn refused_connection_is_unreachable() {
        let source = source_from_location("http://127.0.0.1:1/products", Duration::from_secs(2))
            .unwrap();
        assert!(matches!(source.fetch().await, Err(FetchError::Unreachable(_))));
    }

    #[tokio::test]
    async fn location_prefix_selects_source() {
        let timeout = Duration::from_secs(1);
        let http = source_from_location("https://fakestoreapi.com/products", timeout).unwrap();
        assert_eq!(http.describe(), "https://fakestoreapi.com/products");

        let file = source_from_location("fixtures/products.json", timeout).unwrap();
        assert_eq!(file.describe(), "fixtures/products.json");

        assert!(matches!(
            source_from_location("https://", timeout),
            Err(FetchError::InvalidLocation(_))
        ));
        assert!(source_from_location("  ", timeout).is_err());
    }
}
