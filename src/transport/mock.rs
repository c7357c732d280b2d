//! Mock transport implementation for testing

use super::{HttpRequest, HttpResponse, Transport};
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory implementation of the Transport trait
///
/// Responses are queued up front and handed out in order; every request is
/// recorded for later inspection. When the queue is empty `send` fails with a
/// transport error, which stands in for an unreachable host.
///
/// # Example
/// ```
/// use molthellas::transport::{HttpRequest, MockTransport, Transport};
/// use serde_json::json;
///
/// # tokio_test_block_on(async {
/// let transport = MockTransport::new().with_json(200, &json!({"ok": true}));
/// let response = transport.send(HttpRequest::get("https://example.test")).await.unwrap();
/// assert_eq!(response.status, 200);
/// assert_eq!(transport.requests().len(), 1);
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockTransportState>>,
}

#[derive(Default)]
struct MockTransportState {
    responses: VecDeque<Result<HttpResponse>>,
    requests: Vec<HttpRequest>,
}

impl MockTransport {
    /// Create a new `MockTransport` with no queued responses
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response (builder pattern)
    #[must_use]
    pub fn with_response<S: Into<String>>(self, status: u16, body: S) -> Self {
        self.push(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a JSON response (builder pattern)
    #[must_use]
    pub fn with_json(self, status: u16, body: &Value) -> Self {
        self.with_response(status, body.to_string())
    }

    /// Queue a transport failure (builder pattern)
    #[must_use]
    pub fn with_failure<S: Into<String>>(self, message: S) -> Self {
        self.push(Err(Error::transport(message)));
        self
    }

    /// All requests sent so far, oldest first
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    /// The most recent request, if any
    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.lock().requests.last().cloned()
    }

    fn push(&self, response: Result<HttpResponse>) {
        self.lock().responses.push_back(response);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockTransportState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut state = self.lock();
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(Error::transport("no response queued")))
    }
}
