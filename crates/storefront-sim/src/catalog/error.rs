//! Error types for the catalog actor.

use crate::model::ProductId;
use thiserror::Error;

/// Why fetching the product list failed. None of these are retried automatically.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// The location string could not be turned into a source.
    #[error("invalid catalog location: {0}")]
    InvalidLocation(String),

    /// Connection, timeout or I/O failure.
    #[error("catalog source unreachable: {0}")]
    Unreachable(String),

    /// The source answered with a non-success HTTP status.
    #[error("catalog source answered with HTTP {0}")]
    Status(u16),

    /// The payload is not a JSON array of products.
    #[error("malformed catalog data: {0}")]
    Malformed(String),
}

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("the catalog has not been loaded yet")]
    NotLoaded,

    #[error("the catalog is already loaded")]
    AlreadyLoaded,

    #[error("no product with id {0}")]
    ProductNotFound(ProductId),

    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
