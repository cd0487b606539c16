//! Error types for the session actor.

use crate::user_actor::UserError;
use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// A required field (email or password) is missing.
    #[error("{0}")]
    Validation(String),

    /// No registered user has this email and password.
    #[error("Invalid email or password")]
    Auth,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<UserError> for SessionError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(msg) => SessionError::Validation(msg),
            UserError::ActorCommunication(msg) => SessionError::ActorCommunication(msg),
        }
    }
}
