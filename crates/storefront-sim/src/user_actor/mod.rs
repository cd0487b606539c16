//! # User Directory
//!
//! The collection of registered users, kept in a
//! [`ResourceActor`](actor_framework::ResourceActor). Registration appends a record;
//! nothing ever edits or removes one.
//!
//! The directory is a dependency of the session actor ([`crate::session`]), which owns
//! registration and login. Other code reads users through [`UserClient`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use entity::MISSING_CREDENTIALS;
pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_framework::ResourceActor;

/// Creates a new user directory actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserCreate;
    use actor_framework::ActorClient;

    #[tokio::test]
    async fn registration_requires_email_and_password() {
        let (actor, client) = new(8);
        tokio::spawn(actor.run());

        let missing_password = client
            .register(UserCreate::with_credentials("a@x.com", ""))
            .await;
        assert_eq!(
            missing_password,
            Err(UserError::Validation(MISSING_CREDENTIALS.to_string()))
        );

        let missing_email = client.register(UserCreate::with_credentials("", "p")).await;
        assert!(matches!(missing_email, Err(UserError::Validation(_))));

        assert_eq!(client.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn duplicate_emails_are_accepted() {
        let (actor, client) = new(8);
        tokio::spawn(actor.run());

        let first = client
            .register(UserCreate::with_credentials("a@x.com", "one"))
            .await
            .unwrap();
        let second = client
            .register(UserCreate::with_credentials("a@x.com", "two"))
            .await
            .unwrap();

        assert_ne!(first, second);
        let users = client.list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, first);
    }
}
