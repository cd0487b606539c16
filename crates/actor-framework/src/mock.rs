//! # Mock Framework & Testing Guide
//!
//! [`MockClient<T>`] and [`MockStateClient<S>`] hand out real `ResourceClient<T>` /
//! `StateClient<S>` values whose requests are answered from a queue of expectations instead
//! of by a running actor. Use them to test an actor in isolation from the actors it
//! depends on.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | Mock | Real Actor |
//! |---------|------|------------|
//! | **Determinism** | Fully scripted | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Isolating the actor under test from its dependencies | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! 1. **Client logic test**: drive a typed client against [`create_mock_client`] /
//!    [`create_mock_state_client`] and answer each request by hand with the `expect_*`
//!    helpers.
//! 2. **Single actor test**: spawn the real actor and talk to it through its client.
//! 3. **Actor with mocked dependencies**: spawn the real actor and inject mock clients
//!    as its context. See `tests/checkout_actor_test.rs` in the storefront crate.
//! 4. **Full system**: start the whole `Storefront` and drive it through actions.
//!
//! ## Testing Failure Scenarios
//!
//! ```rust,ignore
//! let mut mock = MockClient::<CartLine>::new();
//! mock.expect_clear().return_err(FrameworkError::ActorClosed);
//! let result = mock.client().clear().await;
//! assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//! ```

use crate::client::{ResourceClient, StateClient};
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, StateRequest};
use crate::state::ActorState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// COLLECTION MOCK
// =============================================================================

/// An expected request to a mocked collection, with the canned response.
#[doc(hidden)]
pub enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Len {
        response: Result<usize, FrameworkError>,
    },
    Clear {
        response: Result<usize, FrameworkError>,
    },
}

pub type ExpectationQueue<E> = Arc<Mutex<VecDeque<E>>>;

/// A mock collection client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were declared; a request that does not
/// match the next expectation panics the mock task, which the caller observes as
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: ExpectationQueue<Expectation<T>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: ExpectationQueue<Expectation<T>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Len { respond_to }, Some(Expectation::Len { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Clear { respond_to }, Some(Expectation::Clear { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> ExpectationBuilder<Expectation<T>, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Get {
            response,
        })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<Expectation<T>, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Create { response }
        })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<Expectation<T>, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List {
            response,
        })
    }

    /// Expects a `len` operation.
    pub fn expect_len(&mut self) -> ExpectationBuilder<Expectation<T>, usize> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Len {
            response,
        })
    }

    /// Expects a `clear` operation.
    pub fn expect_clear(&mut self) -> ExpectationBuilder<Expectation<T>, usize> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Clear {
            response,
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

// =============================================================================
// STATE MOCK
// =============================================================================

/// A mock singleton client. Every command, whatever it is, is answered with the next
/// queued response.
pub struct MockStateClient<S: ActorState> {
    client: StateClient<S>,
    expectations: ExpectationQueue<Result<S::Reply, FrameworkError>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorState> Default for MockStateClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActorState> MockStateClient<S> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<S>>(100);
        let expectations: ExpectationQueue<Result<S::Reply, FrameworkError>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(StateRequest { command, respond_to }) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();
                match expectation {
                    Some(response) => {
                        let _ = respond_to.send(response);
                    }
                    None => panic!("Unexpected command: {:?}", command),
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<S> {
        self.client.clone()
    }

    /// Expects one more command.
    pub fn expect_command(
        &mut self,
    ) -> ExpectationBuilder<Result<S::Reply, FrameworkError>, S::Reply> {
        ExpectationBuilder::new(self.expectations.clone(), |response| response)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

// =============================================================================
// EXPECTATION BUILDER
// =============================================================================

/// Builder returned by the `expect_*` methods; finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<E, R> {
    expectations: ExpectationQueue<E>,
    wrap: fn(Result<R, FrameworkError>) -> E,
}

impl<E, R> ExpectationBuilder<E, R> {
    fn new(expectations: ExpectationQueue<E>, wrap: fn(Result<R, FrameworkError>) -> E) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a collection client and the receiver its requests arrive on.
///
/// Lets a test play the actor by hand: pull each request off the receiver, assert on it,
/// and answer through its `respond_to` channel.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Creates a singleton client and the receiver its commands arrive on.
pub fn create_mock_state_client<S: ActorState>(
    buffer_size: usize,
) -> (StateClient<S>, mpsc::Receiver<StateRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to receive the next command sent to a singleton.
pub async fn expect_command<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(S::Command, oneshot::Sender<Result<S::Reply, FrameworkError>>)> {
    receiver
        .recv()
        .await
        .map(|StateRequest { command, respond_to }| (command, respond_to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Note error")]
    struct NoteError;

    impl ActorEntity for Note {
        type Id = u32;
        type Create = String;
        type Error = NoteError;

        fn from_create_params(id: u32, text: String) -> Result<Self, Self::Error> {
            Ok(Self { id, text })
        }
    }

    #[derive(Debug)]
    struct Counter(u32);

    #[derive(Debug)]
    enum CounterCommand {
        Bump,
    }

    #[async_trait]
    impl ActorState for Counter {
        type Command = CounterCommand;
        type Reply = u32;
        type Context = ();
        type Error = NoteError;

        async fn handle(&mut self, _command: CounterCommand, _ctx: &()) -> Result<u32, NoteError> {
            self.0 += 1;
            Ok(self.0)
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let create_task = tokio::spawn(async move { client.create("hello".to_string()).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload, "hello");
        responder.send(Ok(7)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(7)));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_create().return_ok(1);
        mock.expect_list().return_ok(vec![Note {
            id: 1,
            text: "hello".into(),
        }]);
        mock.expect_clear().return_err(FrameworkError::ActorClosed);

        let client = mock.client();
        assert_eq!(client.create("hello".into()).await.unwrap(), 1);
        assert_eq!(client.list().await.unwrap().len(), 1);
        assert!(matches!(client.clear().await, Err(FrameworkError::ActorClosed)));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_surfaces_as_dropped() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_len().return_ok(3);

        let result = mock.client().clear().await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    async fn test_mock_state_client_replays_queue() {
        let mut mock = MockStateClient::<Counter>::new();
        mock.expect_command().return_ok(41);
        mock.expect_command().return_err(FrameworkError::ActorDropped);

        let client = mock.client();
        assert_eq!(client.send(CounterCommand::Bump).await.unwrap(), 41);
        assert!(client.send(CounterCommand::Bump).await.is_err());
        mock.verify();
    }

    #[tokio::test]
    async fn test_manual_state_client() {
        let (client, mut receiver) = create_mock_state_client::<Counter>(4);
        let task = tokio::spawn(async move { client.send(CounterCommand::Bump).await });

        let (command, responder) = expect_command(&mut receiver).await.unwrap();
        assert!(matches!(command, CounterCommand::Bump));
        responder.send(Ok(5)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 5);
    }
}
