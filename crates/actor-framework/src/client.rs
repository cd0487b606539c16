//! # Generic Clients
//!
//! This module defines the generic clients for communicating with actors. Both hold only a
//! sender, so cloning them is cheap and they can be shared across tasks.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, StateRequest};
use crate::state::ActorState;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// All records in creation order.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn len(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Len { respond_to })
            .await
    }

    /// Removes every record, returning how many were removed.
    pub async fn clear(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Clear { respond_to })
            .await
    }
}

/// A type-safe client for interacting with a `StateActor`.
pub struct StateClient<S: ActorState> {
    sender: mpsc::Sender<StateRequest<S>>,
}

impl<S: ActorState> Clone for StateClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ActorState> StateClient<S> {
    pub fn new(sender: mpsc::Sender<StateRequest<S>>) -> Self {
        Self { sender }
    }

    /// Sends a command and waits for the state machine's reply.
    pub async fn send(&self, command: S::Command) -> Result<S::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
