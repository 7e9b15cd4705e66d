use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::core::{RawResponse, RequestSpec, Transport};
use crate::error::{CongressApiError, Result};

/// Canned reply for `MockTransport`.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Reply(RawResponse),
    /// Simulated connection failure.
    Error(String),
}

impl MockResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self::Reply(RawResponse {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        })
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self::Reply(RawResponse {
            status,
            content_type: Some("text/plain".to_string()),
            body: body.into(),
        })
    }
}

/// Shared control surface for a `MockTransport`: queue replies, inspect requests.
#[derive(Debug, Default)]
pub struct MockHandle {
    responses: Mutex<VecDeque<MockResponse>>,
    calls: Mutex<Vec<RequestSpec>>,
}

impl MockHandle {
    pub fn add_response(&self, response: MockResponse) {
        self.responses.lock().unwrap_or_else(PoisonError::into_inner).push_back(response);
    }

    pub fn add_responses(&self, responses: impl IntoIterator<Item = MockResponse>) {
        self.responses.lock().unwrap_or_else(PoisonError::into_inner).extend(responses);
    }

    /// Every request seen so far, in order.
    pub fn calls(&self) -> Vec<RequestSpec> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// In-memory transport for tests. Replies are consumed in FIFO order; an empty
/// queue behaves like a refused connection.
#[derive(Debug, Clone)]
pub struct MockTransport {
    handle: Arc<MockHandle>,
}

impl MockTransport {
    pub fn new() -> (Self, Arc<MockHandle>) {
        let handle = Arc::new(MockHandle::default());
        (Self { handle: handle.clone() }, handle)
    }

    pub fn with_responses(responses: Vec<MockResponse>) -> (Self, Arc<MockHandle>) {
        let (transport, handle) = Self::new();
        handle.add_responses(responses);
        (transport, handle)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, request: &RequestSpec) -> Result<RawResponse> {
        self.handle.calls.lock().unwrap_or_else(PoisonError::into_inner).push(request.clone());
        let next = self.handle.responses.lock().unwrap_or_else(PoisonError::into_inner).pop_front();
        match next {
            Some(MockResponse::Reply(response)) => Ok(response),
            Some(MockResponse::Error(message)) => Err(CongressApiError::Http(message)),
            None => Err(CongressApiError::Http("no mock response queued".to_string())),
        }
    }

    fn clone_box(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }
}
