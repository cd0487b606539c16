//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a record type must satisfy to be kept in a
//! [`ResourceActor`](crate::ResourceActor) collection (registered users, cart lines, ...).
//!
//! The actor assigns ids from a counter and stores records ordered by id, so listing a
//! collection always yields records in the order they were created. Associated types keep
//! payloads apart: a `User` collection only accepts a `UserCreate`, and the compiler
//! rejects anything else.

use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// Validation belongs in [`ActorEntity::from_create_params`]: a rejected payload never
/// reaches the store, and the error is returned to the caller boxed in
/// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError).
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered so that
    /// listing follows creation order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the assigned ID and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;
}
