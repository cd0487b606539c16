//! The storefront-wide error type.
//!
//! Each actor has its own error enum; [`StorefrontError`] wraps them so the shell (and
//! tests) can handle any action's failure in one place, and [`ErrorKind`] sorts them
//! into the categories users see.

use crate::cart_actor::CartError;
use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::session::SessionError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// How a failure is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Validation,
    Auth,
    Precondition,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Fetch => "FetchError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::Auth => "AuthError",
            ErrorKind::Precondition => "PreconditionError",
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::Internal => "InternalError",
        }
    }
}

impl StorefrontError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorefrontError::Catalog(CatalogError::Fetch(_)) => ErrorKind::Fetch,
            StorefrontError::Catalog(CatalogError::NotLoaded)
            | StorefrontError::Catalog(CatalogError::AlreadyLoaded) => ErrorKind::Precondition,
            StorefrontError::Catalog(CatalogError::ProductNotFound(_)) => ErrorKind::NotFound,
            StorefrontError::Session(SessionError::Validation(_)) => ErrorKind::Validation,
            StorefrontError::Session(SessionError::Auth) => ErrorKind::Auth,
            StorefrontError::Checkout(CheckoutError::Precondition(_)) => ErrorKind::Precondition,
            StorefrontError::Checkout(CheckoutError::Session(inner)) => {
                StorefrontError::Session(inner.clone()).kind()
            }
            _ => ErrorKind::Internal,
        }
    }
}
