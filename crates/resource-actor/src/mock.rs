//! # Test Doubles
//!
//! Two ways to stand in for a running actor when testing code that sits in front of one
//! (typed clients, dispatchers):
//!
//! - [`MockClient`] answers requests from a queue of scripted expectations. Use it to
//!   drive error paths a real actor will not produce on demand, such as a closed channel
//!   or an exhausted id space.
//! - [`create_mock_client`] plus the `expect_*` helpers hand the raw requests to the test,
//!   which asserts on the payload and replies by hand.
//!
//! Anything that depends on the collection itself (ordering, id allocation, commit
//! discipline) is better tested against a real [`ResourceActor`](crate::ResourceActor).
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Villa>::new();
//! mock.expect_get(VillaId(1)).return_err(FrameworkError::ActorClosed);
//!
//! let client = VillaClient::new(mock.client());
//! let result = client.get(VillaId(1)).await;
//! assert!(matches!(result, Err(VillaError::ActorCommunicationError(_))));
//! mock.verify();
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// An expected request and the response to return for it.
enum Expectation<T: ActorEntity> {
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Replace {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Patch {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A scripted stand-in for a `ResourceActor<T>`.
///
/// Expectations are consumed in order. A request that does not match the next expectation
/// (different operation or different id) panics the mock task, which the caller observes
/// as `FrameworkError::ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Spawns the answering task with an empty script.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Replace { id, respond_to, .. },
                        Some(Expectation::Replace {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Replace called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Patch { id, respond_to, .. },
                        Some(Expectation::Patch {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Patch called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("request does not match the next expectation");
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

    /// A client whose requests are answered from the script.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects a `replace` operation for `id`.
    pub fn expect_replace(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Replace { id, response })
    }

    /// Expects a `patch` operation for `id`.
    pub fn expect_patch(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Patch { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Panics if any scripted expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("{remaining} expectation(s) were never consumed");
        }
    }
}

/// Builder that records what a pending expectation answers with.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Answers the request with `value`.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Answers the request with `error`.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests; the test pulls them with the `expect_*` helpers below,
/// asserts on the payload and replies through the returned sender.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Pulls the next request, if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Pulls the next request, if it is a Replace.
pub async fn expect_replace<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Replace, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Replace {
            id,
            params,
            respond_to,
        }) => Some((id, params, respond_to)),
        _ => None,
    }
}

/// Pulls the next request, if it is a Patch.
pub async fn expect_patch<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Patch, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Patch {
            id,
            patch,
            respond_to,
        }) => Some((id, patch, respond_to)),
        _ => None,
    }
}
