//! # User Client
//!
//! Provides a high‑level API for the user directory.
//! It wraps a `ResourceClient<User>` and exposes domain‑specific methods.
use crate::model::{User, UserCreate, UserId};
use crate::user_actor::UserError;
use actor_framework::ActorClient;
use actor_framework::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the user directory.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<UserError>()
            .unwrap_or_else(|e| UserError::ActorCommunication(e.to_string()))
    }
}

impl UserClient {
    /// Adds a user to the directory. Fails with [`UserError::Validation`] if email or
    /// password is empty.
    #[instrument(skip(self, params), fields(email = %params.email))]
    pub async fn register(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// The earliest registered user whose email and password both match exactly.
    #[instrument(skip(self, password))]
    pub async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let users = self.list().await?;
        Ok(users
            .into_iter()
            .find(|user| user.has_credentials(email, password)))
    }
}
