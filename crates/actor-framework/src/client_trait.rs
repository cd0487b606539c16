//! # ActorClient Trait
//!
//! Provides a common interface for collection-specific clients, adding default `get`,
//! `list` and `len` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the standard read operations.
///
/// Implementors supply the inner client and a mapping from [`FrameworkError`] to their own
/// error type; the reads come for free.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<User> for UserClient {
///     type Error = UserError;
///     fn inner(&self) -> &ResourceClient<User> { &self.inner }
///     fn map_error(e: FrameworkError) -> UserError {
///         e.downcast_entity::<UserError>()
///             .unwrap_or_else(|e| UserError::ActorCommunication(e.to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Number of entities in the collection.
    async fn len(&self) -> Result<usize, Self::Error> {
        self.inner().len().await.map_err(Self::map_error)
    }
}
