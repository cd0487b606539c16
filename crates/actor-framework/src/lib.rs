//! # Actor Framework
//!
//! Building blocks for type-safe actor systems on Tokio. Each actor is a task that owns
//! its state outright and processes one message at a time; everything else talks to it
//! through a cheap, cloneable client.
//!
//! ## Two Kinds of Actor
//!
//! | Actor | Owns | Contract | Client |
//! |-------|------|----------|--------|
//! | [`ResourceActor<T>`] | an ordered collection of records | [`ActorEntity`] | [`ResourceClient<T>`] |
//! | [`StateActor<S>`] | a single state machine | [`ActorState`] | [`StateClient<S>`] |
//!
//! Collections are append-and-clear: `create`, `get`, `list` (creation order), `len` and
//! `clear`. State machines accept a domain-specific `Command` enum and answer with a
//! `Reply`.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `StateActor::run(context)`, not at
//! construction time, so every actor can be created first and wired afterwards:
//!
//! ```rust,ignore
//! let (users, user_client) = ResourceActor::<User>::new(32);
//! let (session, session_client) = StateActor::new(Session::default(), 32);
//!
//! tokio::spawn(users.run());
//! tokio::spawn(session.run(UserClient::new(user_client)));
//! ```
//!
//! ## Errors
//!
//! Domain errors raised inside an actor come back boxed in
//! [`FrameworkError::EntityError`]. Typed clients unbox them with
//! [`FrameworkError::downcast_entity`], so callers match on their own error enums.
//!
//! ## Shutdown
//!
//! An actor's loop ends when every client has been dropped. As long as the dependency
//! graph is acyclic, dropping the outermost clients shuts the whole system down in
//! dependency order.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`] and [`mock::MockStateClient`], which
//! answer requests from scripted expectations instead of a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod state_actor;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::{ResourceClient, StateClient};
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response, StateRequest};
pub use state::ActorState;
pub use state_actor::StateActor;
