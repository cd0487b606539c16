use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Adding and clearing always succeed, so the only failure is losing contact with the
/// actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
