//! # Checkout
//!
//! The payment and confirmation state machine:
//!
//! ```text
//! Idle --select--> PaymentSelected --request--> AwaitingConfirmation
//!  ^                                              |            |
//!  +------------------- confirm (clears cart) ----+            |
//!  +------------------- cancel (keeps cart) -------------------+
//! ```
//!
//! The checkout actor reads the active user from the session actor and the cart contents
//! from the cart actor; both clients arrive as its run context. The session is read
//! again on confirm, and the order only goes through for the user who requested it.

pub mod error;
pub mod state;

pub use error::*;
pub use state::*;

use crate::clients::CheckoutClient;
use actor_framework::StateActor;

/// Creates a new checkout actor and its client.
pub fn new(buffer_size: usize) -> (StateActor<Checkout>, CheckoutClient) {
    let (actor, generic_client) = StateActor::new(Checkout::default(), buffer_size);
    (actor, CheckoutClient::new(generic_client))
}
