//! Error types for the user directory.

use thiserror::Error;

/// Errors that can occur during user directory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// A required registration field is missing.
    #[error("{0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

