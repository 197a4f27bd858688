//! # Mock Store & Testing Guide
//!
//! `MockClient<T>` hands out a real [`StoreClient<T>`] whose requests are answered
//! from a queue of expectations instead of an actual store. It lets you unit test
//! the logic *around* a client (validation, error mapping, result shaping) without
//! running a [`StoreActor`](crate::StoreActor).
//!
//! ## When to use Mocks vs a Real Store
//!
//! | Feature | MockClient | Real StoreActor |
//! |---------|------------|-----------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | None, canned answers | Real ids, real contents |
//! | **Use Case** | Logic around the client | The store itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires arranging real state |
//!
//! ## Pattern 0: Canned Answers
//!
//! ```rust
//! use resource_store::mock::MockClient;
//! use resource_store::{StoreEntity, StoreError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Tag { id: u64, label: String }
//!
//! impl StoreEntity for Tag {
//!     type Id = u64;
//!     type Draft = String;
//!     fn id(&self) -> &u64 { &self.id }
//!     fn from_draft(id: u64, label: String) -> Self { Self { id, label } }
//!     fn apply_draft(&mut self, label: String) { self.label = label; }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_get(1).return_ok(Tag { id: 1, label: "red".into() });
//!     mock.expect_delete(2).return_err(StoreError::NotFound("2".into()));
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().label, "red");
//!     assert!(client.delete(2).await.unwrap_err().is_not_found());
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Pattern 1: Asserting Nothing Was Sent
//!
//! [`create_mock_client`] returns the raw receiver instead. Use it to check that a
//! caller rejected a request *before* talking to the store:
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<Product>(10);
//! let service = ProductService::new(client);
//! assert!(service.create_product(bad_draft).await.is_err());
//! assert!(receiver.try_recv().is_err());
//! ```

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to return for it.
enum Expectation<T: StoreEntity> {
    Create {
        response: Result<T, StoreError>,
    },
    Get {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Replace {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), StoreError>,
    },
    Exists {
        id: T::Id,
        response: Result<bool, StoreError>,
    },
    FindBy {
        response: Result<Vec<T>, StoreError>,
    },
    Count {
        response: Result<usize, StoreError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;
type Failures = Arc<Mutex<Vec<String>>>;

/// A mock store with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in FIFO order. A request that does
/// not match the next expectation (wrong kind or wrong id) is answered with
/// [`StoreError::ActorDropped`] and recorded; [`MockClient::verify`] reports it.
pub struct MockClient<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    failures: Failures,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let failures: Failures = Arc::new(Mutex::new(Vec::new()));

        let queue = expectations.clone();
        let failed = failures.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                answer(request, expectation, &failed);
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            failures,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_replace(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Replace { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_exists(&mut self, id: T::Id) -> ExpectationBuilder<T, bool> {
        self.builder(move |response| Expectation::Exists { id, response })
    }

    pub fn expect_find_by(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::FindBy { response })
    }

    pub fn expect_count(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(|response| Expectation::Count { response })
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let failures = self.failures.lock().unwrap();
        if !failures.is_empty() {
            panic!("Unexpected requests: {}", failures.join("; "));
        }
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder returned by the `expect_*` methods of [`MockClient`].
pub struct ExpectationBuilder<T: StoreEntity, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T>>,
}

impl<T: StoreEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

fn reply<R>(respond_to: oneshot::Sender<Result<R, StoreError>>, response: Result<R, StoreError>) {
    let _ = respond_to.send(response);
}

/// Answers one request from one expectation.
///
/// Mismatches are recorded in `failures` before the caller is released, and the
/// caller receives `ActorDropped`.
fn answer<T: StoreEntity>(
    request: StoreRequest<T>,
    expectation: Option<Expectation<T>>,
    failures: &Mutex<Vec<String>>,
) {
    let fail = |message: String| failures.lock().unwrap().push(message);
    let kind = request.kind();

    match (request, expectation) {
        (StoreRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            reply(respond_to, response)
        }
        (StoreRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
        | (
            StoreRequest::Replace { id, respond_to, .. },
            Some(Expectation::Replace { id: want, response }),
        ) => {
            if id == want {
                reply(respond_to, response)
            } else {
                fail(format!("{}: expected id {:?}, got {:?}", kind, want, id));
                reply(respond_to, Err(StoreError::ActorDropped))
            }
        }
        (
            StoreRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: want, response }),
        ) => {
            if id == want {
                reply(respond_to, response)
            } else {
                fail(format!("{}: expected id {:?}, got {:?}", kind, want, id));
                reply(respond_to, Err(StoreError::ActorDropped))
            }
        }
        (
            StoreRequest::Exists { id, respond_to },
            Some(Expectation::Exists { id: want, response }),
        ) => {
            if id == want {
                reply(respond_to, response)
            } else {
                fail(format!("{}: expected id {:?}, got {:?}", kind, want, id));
                reply(respond_to, Err(StoreError::ActorDropped))
            }
        }
        (StoreRequest::Count { respond_to }, Some(Expectation::Count { response })) => {
            reply(respond_to, response)
        }
        (StoreRequest::List { respond_to }, Some(Expectation::List { response }))
        | (StoreRequest::FindBy { respond_to, .. }, Some(Expectation::FindBy { response })) => {
            reply(respond_to, response)
        }
        // The request is dropped with its responder, so the caller sees ActorDropped.
        (_, None) => fail(format!("unexpected {} request", kind)),
        (_, Some(_)) => fail(format!("{} request did not match the next expectation", kind)),
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Useful when a test only wants to inspect what was sent, or to assert that
/// nothing was sent at all.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Draft, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Replace request
pub async fn expect_replace<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, T::Draft, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Replace {
            id,
            draft,
            respond_to,
        }) => Some((id, draft, respond_to)),
        _ => None,
    }
}
