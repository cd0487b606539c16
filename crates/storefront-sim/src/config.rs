//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_CATALOG_SOURCE` - catalog URL or JSON file path
//!   (default: https://fakestoreapi.com/products)
//! - `STOREFRONT_FETCH_TIMEOUT_MS` - HTTP timeout for the catalog fetch (default: 10000)
//! - `STOREFRONT_CHANNEL_CAPACITY` - mailbox size of every actor (default: 32)

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CATALOG_SOURCE: &str = "https://fakestoreapi.com/products";
const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Where the catalog is fetched from: an http(s) URL or a file path
    pub catalog_source: String,
    /// Upper bound on the catalog HTTP request
    pub fetch_timeout: Duration,
    /// Bounded mailbox size for each actor
    pub channel_capacity: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_source: DEFAULT_CATALOG_SOURCE.to_string(),
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value lookup; unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let catalog_source = lookup("STOREFRONT_CATALOG_SOURCE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.catalog_source);

        let fetch_timeout = match lookup("STOREFRONT_FETCH_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(parse_env("STOREFRONT_FETCH_TIMEOUT_MS", &raw)?),
            None => defaults.fetch_timeout,
        };

        let channel_capacity = match lookup("STOREFRONT_CHANNEL_CAPACITY") {
            Some(raw) => parse_env("STOREFRONT_CHANNEL_CAPACITY", &raw)?,
            None => defaults.channel_capacity,
        };
        // tokio panics on a zero-capacity channel
        if channel_capacity == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_CHANNEL_CAPACITY".to_string(),
                "must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            catalog_source,
            fetch_timeout,
            channel_capacity,
        })
    }
}

fn parse_env<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
