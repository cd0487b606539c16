//! # ActorState Trait
//!
//! Not every component is a collection. A catalog, a login session or a checkout flow is a
//! single piece of state that moves through transitions in response to commands.
//! `ActorState` is the contract for such singletons: the [`StateActor`](crate::StateActor)
//! owns one value of the implementing type and feeds it commands one at a time.
//!
//! # Async & Context
//! `handle` is async so a transition can consult other actors (checkout asks the session
//! actor who is logged in). Those dependencies arrive through `Context`, injected when the
//! actor starts running rather than when it is constructed.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait for singleton state owned by a [`StateActor`](crate::StateActor).
#[async_trait]
pub trait ActorState: Send + 'static {
    /// Commands accepted by this state machine.
    type Command: Send + Debug;

    /// The reply produced by a successful command.
    ///
    /// Usually an enum whose variants line up with the command variants; the typed client
    /// unpacks the variant it expects.
    type Reply: Send + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this state machine.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Applies one command. A failed command must leave the state unchanged.
    async fn handle(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::Reply, Self::Error>;
}
