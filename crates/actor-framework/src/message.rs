//! # Generic Messages
//!
//! This module defines the message types used for communication between the clients and
//! the two actor kinds.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::state::ActorState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Requests understood by a [`ResourceActor`](crate::ResourceActor).
///
/// Collections in this system are append-and-clear: records are created, read back
/// individually or in creation order, counted, and dropped all at once.
///
/// This type is generic over `T: ActorEntity` and uses its associated types, so a
/// "User Create" payload can't be sent to a cart collection.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Len {
        respond_to: Response<usize>,
    },
    /// Removes every record and answers with how many were removed.
    Clear {
        respond_to: Response<usize>,
    },
}

/// A command addressed to a [`StateActor`](crate::StateActor).
#[derive(Debug)]
pub struct StateRequest<S: ActorState> {
    pub command: S::Command,
    pub respond_to: Response<S::Reply>,
}
