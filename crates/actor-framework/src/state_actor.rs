//! # Singleton State Actor
//!
//! The `StateActor` owns exactly one [`ActorState`] value and applies commands to it in
//! arrival order. It is the server half for components that are state machines rather
//! than collections.

use crate::actor::short_type_name;
use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single state machine.
///
/// **Concurrency Model**: commands are handled one after another. A command that awaits
/// another actor (or a network fetch) holds up the commands queued behind it, which is
/// what keeps transitions from interleaving.
///
/// # Context Injection
/// The `context` passed to [`StateActor::run`] is lent to every `handle` call. Clients of
/// other actors can therefore be created *after* this actor and wired in when it starts.
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` around `state`, plus the client used to reach it.
    pub fn new(state: S, buffer_size: usize) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        (actor, StateClient::new(sender))
    }

    /// Runs the actor's event loop until every client is dropped.
    pub async fn run(mut self, context: S::Context) {
        let state_type = short_type_name::<S>();
        info!(state_type, "Actor started");

        while let Some(StateRequest {
            command,
            respond_to,
        }) = self.receiver.recv().await
        {
            debug!(state_type, ?command, "Command");
            let result = self
                .state
                .handle(command, &context)
                .await
                .map_err(|e| FrameworkError::EntityError(Box::new(e)));
            match &result {
                Ok(reply) => debug!(state_type, ?reply, "Command ok"),
                Err(e) => warn!(state_type, error = %e, "Command failed"),
            }
            let _ = respond_to.send(result);
        }

        info!(state_type, "Shutdown");
    }
}
