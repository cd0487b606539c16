//! # Session
//!
//! Registration, login and logout. The session actor owns the "who is logged in" state and
//! talks to the user directory ([`crate::user_actor`]), which it receives as its run
//! context.
//!
//! Passwords are plain text and compared by equality, and one email may be registered any
//! number of times; login picks the earliest matching registration.

pub mod error;
pub mod state;

pub use error::*;
pub use state::*;

use crate::clients::SessionClient;
use actor_framework::StateActor;

/// Creates a new session actor and its client.
pub fn new(buffer_size: usize) -> (StateActor<Session>, SessionClient) {
    let (actor, generic_client) = StateActor::new(Session::default(), buffer_size);
    (actor, SessionClient::new(generic_client))
}
