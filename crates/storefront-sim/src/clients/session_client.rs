//! # Session Client
//!
//! High-level API for the session actor. Wraps a `StateClient<Session>` and unpacks the
//! replies into plain values.
use crate::model::{Password, User, UserCreate, UserId};
use crate::session::{Session, SessionCommand, SessionError, SessionReply};
use actor_framework::{FrameworkError, StateClient};
use tracing::{debug, instrument};

/// Client for interacting with the session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: StateClient<Session>,
}

impl SessionClient {
    pub fn new(inner: StateClient<Session>) -> Self {
        Self { inner }
    }

    fn map_error(e: FrameworkError) -> SessionError {
        e.downcast_entity::<SessionError>()
            .unwrap_or_else(|e| SessionError::ActorCommunication(e.to_string()))
    }

    async fn send(&self, command: SessionCommand) -> Result<SessionReply, SessionError> {
        self.inner.send(command).await.map_err(Self::map_error)
    }

    /// Registers a user without logging them in.
    #[instrument(skip(self, params), fields(email = %params.email))]
    pub async fn register(&self, params: UserCreate) -> Result<UserId, SessionError> {
        debug!("Sending request");
        match self.send(SessionCommand::Register(params)).await? {
            SessionReply::Registered(id) => Ok(id),
            _ => unreachable!("Invalid reply type"),
        }
    }

    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        debug!("Sending request");
        let command = SessionCommand::Login {
            email: email.to_string(),
            password: Password::new(password),
        };
        match self.send(command).await? {
            SessionReply::LoggedIn(user) => Ok(user),
            _ => unreachable!("Invalid reply type"),
        }
    }

    /// Returns the user who was logged in, if any.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<Option<User>, SessionError> {
        debug!("Sending request");
        match self.send(SessionCommand::Logout).await? {
            SessionReply::LoggedOut(user) => Ok(user),
            _ => unreachable!("Invalid reply type"),
        }
    }

    pub async fn current(&self) -> Result<Option<User>, SessionError> {
        match self.send(SessionCommand::Current).await? {
            SessionReply::Current(user) => Ok(user),
            _ => unreachable!("Invalid reply type"),
        }
    }
}
