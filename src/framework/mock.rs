//! # Mock Framework
//!
//! Stand-ins for real actors so a client, or an actor that depends on other actors, can be
//! tested in isolation. The ride actor is the main consumer: its tests replace the rider
//! and driver directories with mocks and script what they answer.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Scripted replies | Real state transitions |
//! | **Error Injection** | Easy (`return_err`) | Needs the right state |
//! | **Use Case** | Logic *around* a dependency | The actor itself, or the full system |
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue expectations up front, then call [`MockClient::verify`].
//! - [`create_mock_client`] plus [`expect_create`], [`expect_get`], [`expect_list`],
//!   [`expect_update`], [`expect_action`]: receive the raw request and answer it by hand.
//!   Useful when the test needs to inspect the payload.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// One scripted request and the reply it should receive.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client that answers requests from a queue of expectations, in order.
///
/// A request that does not match the next expectation (wrong kind or wrong id) panics the
/// mock task; the caller then sees [`FrameworkError::ActorDropped`] and
/// [`MockClient::verify`] reports the unmet expectations.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
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
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                match (request, next) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "action called with unexpected id");
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

    fn push(&self, expectation: Expectation<T>) {
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectation<'_, T> {
        GetExpectation { mock: self, id }
    }

    /// Expects a `list`.
    pub fn expect_list(&mut self) -> ListExpectation<'_, T> {
        ListExpectation { mock: self }
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> CreateExpectation<'_, T> {
        CreateExpectation { mock: self }
    }

    /// Expects an `action` against `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectation<'_, T> {
        ActionExpectation { mock: self, id }
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectation<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
    id: T::Id,
}

impl<T: ActorEntity> GetExpectation<'_, T> {
    pub fn return_ok(self, value: Option<T>) {
        self.mock.push(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectation<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
}

impl<T: ActorEntity> ListExpectation<'_, T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.mock.push(Expectation::List { response: Ok(items) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::List {
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectation<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
}

impl<T: ActorEntity> CreateExpectation<'_, T> {
    pub fn return_ok(self, item: T) {
        self.mock.push(Expectation::Create { response: Ok(item) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectation<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
    id: T::Id,
}

impl<T: ActorEntity> ActionExpectation<'_, T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.mock.push(Expectation::Action {
            id: self.id,
            response: Ok(result),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Action {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a List.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is an Update.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
