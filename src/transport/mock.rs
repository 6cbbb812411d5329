//! Mock transport implementation for testing.
//!
//! Responses are served from an in-memory queue and every request is
//! recorded, so tests can drive the envelope logic without a network.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use serde_json::{Value, json};

use super::traits::{RemoteRequest, Transport, TransportClient, TransportStats, transport_failure};

/// Mock transport for testing.
///
/// Queued raw responses are returned in order, one per request. When the
/// queue is empty the fallback response is returned if one is set,
/// otherwise a transport failure.
///
/// ```rust
/// use bridge_sdk::testing::{MockTransport, failure};
///
/// let mock = MockTransport::new()
///     .with_response(serde_json::json!({ "total": 0 }))
///     .with_response(failure("Invalid token", 401));
/// assert_eq!(mock.pending(), 2);
/// ```
pub struct MockTransport {
    /// Canned responses, served front to back.
    responses: Mutex<VecDeque<Value>>,
    /// Returned when the queue is empty.
    fallback: RwLock<Option<Value>>,
    /// Every request seen, in order.
    requests: RwLock<Vec<RemoteRequest>>,
    request_count: AtomicU64,
    failed_count: AtomicU64,
}

impl MockTransport {
    /// Creates a mock transport with an empty queue.
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: RwLock::new(None),
            requests: RwLock::new(Vec::new()),
            request_count: AtomicU64::new(0),
            failed_count: AtomicU64::new(0),
        }
    }

    /// Queues a raw response.
    pub fn push_response(&self, raw: Value) {
        self.responses.lock().push_back(raw);
    }

    /// Queues a raw response, builder style.
    #[must_use]
    pub fn with_response(self, raw: Value) -> Self {
        self.push_response(raw);
        self
    }

    /// Sets the response returned whenever the queue is empty.
    pub fn set_fallback(&self, raw: Value) {
        *self.fallback.write() = Some(raw);
    }

    /// Returns the number of queued responses not yet served.
    pub fn pending(&self) -> usize {
        self.responses.lock().len()
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Returns a copy of every request seen, in order.
    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.requests.read().clone()
    }

    /// Returns the most recent request.
    pub fn last_request(&self) -> Option<RemoteRequest> {
        self.requests.read().last().cloned()
    }

    /// Clears queued responses, the fallback, and recorded requests.
    pub fn reset(&self) {
        self.responses.lock().clear();
        *self.fallback.write() = None;
        self.requests.write().clear();
        self.request_count.store(0, Ordering::Relaxed);
        self.failed_count.store(0, Ordering::Relaxed);
    }

    fn next_response(&self, request: &RemoteRequest) -> Value {
        if let Some(raw) = self.responses.lock().pop_front() {
            return raw;
        }
        if let Some(raw) = self.fallback.read().clone() {
            return raw;
        }
        self.failed_count.fetch_add(1, Ordering::Relaxed);
        transport_failure(json!({
            "message": "no mock response queued",
            "path": request.path,
        }))
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("pending", &self.pending())
            .field("request_count", &self.request_count())
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl TransportClient for MockTransport {
    async fn fetch(&self, request: RemoteRequest) -> Value {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        let raw = self.next_response(&request);
        self.requests.write().push(request);
        raw
    }

    fn transport_type(&self) -> Transport {
        Transport::Mock
    }

    fn stats(&self) -> TransportStats {
        TransportStats {
            requests_sent: self.request_count(),
            requests_failed: self.failed_count.load(Ordering::Relaxed),
        }
    }
}
