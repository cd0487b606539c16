//! Error types for the checkout actor.

use crate::cart_actor::CartError;
use crate::session::SessionError;
use thiserror::Error;

/// A checkout step attempted out of order.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PreconditionFailure {
    #[error("no active session")]
    NoActiveSession,

    #[error("no payment method")]
    NoPaymentMethod,

    #[error("confirmation pending")]
    ConfirmationPending,

    #[error("no order awaiting confirmation")]
    NothingToConfirm,

    /// A different user logged in after the order was put up for confirmation.
    #[error("session changed")]
    SessionChanged,
}

/// Errors that can occur during checkout.
///
/// Every failure leaves the checkout state exactly as it was.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("{0}")]
    Precondition(#[from] PreconditionFailure),

    #[error("session: {0}")]
    Session(#[from] SessionError),

    #[error("cart: {0}")]
    Cart(#[from] CartError),

    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
