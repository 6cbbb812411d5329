//! Transport trait definitions and common types.
//!
//! A transport sends one [`RemoteRequest`] and hands back the raw JSON the
//! bridge answered with. It never fails: anything that prevents a JSON
//! answer is reported as a transport-level error object, so the envelope
//! layer sees one uniform shape.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{TRANSPORT_ERROR_NAME, TRANSPORT_ERROR_STATUS, error_object, has_numeric_status};
use crate::operation::Method;
use crate::{Error, Result};

// ============================================================================
// Transport Enum
// ============================================================================

/// Available transport implementations.
///
/// ```rust
/// use bridge_sdk::Transport;
///
/// let transport = Transport::default();
/// assert!(transport.is_http());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// JSON over HTTP via reqwest.
    #[default]
    Http,
    /// In-memory canned responses, for tests.
    Mock,
}

impl Transport {
    /// Returns `true` if this is the HTTP transport.
    pub fn is_http(&self) -> bool {
        matches!(self, Transport::Http)
    }

    /// Returns `true` if this is the mock transport.
    pub fn is_mock(&self) -> bool {
        matches!(self, Transport::Mock)
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transport::Http => write!(f, "HTTP"),
            Transport::Mock => write!(f, "Mock"),
        }
    }
}

// ============================================================================
// Transport Statistics
// ============================================================================

/// Request counters for a transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportStats {
    /// Requests handed to the transport.
    pub requests_sent: u64,
    /// Requests that ended in a transport-level error object or a
    /// non-success HTTP status.
    pub requests_failed: u64,
}

impl TransportStats {
    /// Returns the number of requests that did not fail.
    pub fn requests_succeeded(&self) -> u64 {
        self.requests_sent.saturating_sub(self.requests_failed)
    }
}

// ============================================================================
// Remote Request
// ============================================================================

/// One request as handed to a transport.
///
/// Query parameters and headers are already flattened to string pairs;
/// the body, when present, is sent as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the server URL.
    pub path: String,
    /// URL query parameters, in order.
    pub query: Vec<(String, String)>,
    /// JSON body.
    pub body: Option<Value>,
    /// Request headers, in order.
    pub headers: Vec<(String, String)>,
}

impl RemoteRequest {
    /// Creates a request with no query, body, or headers.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// Appends a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Returns the first query value named `name`.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the first header value named `name`, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Flattens a serializable value into string pairs for a URL query or
/// header map.
///
/// `null` and `()` produce no pairs. Objects produce one pair per non-null
/// field; arrays repeat the key per element; nested objects are sent as
/// JSON text.
pub(crate) fn encode_pairs<T: Serialize + ?Sized>(value: &T) -> Result<Vec<(String, String)>> {
    let map = match serde_json::to_value(value)? {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(Error::invalid_argument(format!(
                "expected an object of named parameters, got {}",
                json_type(&other)
            )));
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items.into_iter().filter(|item| !item.is_null()) {
                    pairs.push((key.clone(), scalar_text(item)));
                }
            }
            other => pairs.push((key, scalar_text(other))),
        }
    }
    Ok(pairs)
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Builds the raw response reporting a transport-level failure.
pub(crate) fn transport_failure(data: Value) -> Value {
    serde_json::json!({
        "error": error_object(TRANSPORT_ERROR_NAME, TRANSPORT_ERROR_STATUS, Some(data)),
    })
}

/// Returns `true` if `value` is an object carrying a numeric `status`.
pub(crate) fn is_error_object(value: &Value) -> bool {
    value.is_object() && has_numeric_status(value)
}

/// Normalizes a non-success JSON body into a raw error response.
///
/// A bare error object is wrapped under `error`; a body that already wraps
/// one is passed through. Anything else becomes a transport failure.
pub(crate) fn error_response(status: u16, body: Option<Value>, text: &str) -> Value {
    match body {
        Some(body) if is_error_object(&body) => {
            let mut wrapper = Map::with_capacity(1);
            wrapper.insert("error".to_owned(), body);
            Value::Object(wrapper)
        }
        Some(body) if body.get("error").is_some_and(is_error_object) => body,
        Some(body) => transport_failure(serde_json::json!({ "status": status, "body": body })),
        None => transport_failure(serde_json::json!({ "status": status, "body": text })),
    }
}

// ============================================================================
// Transport Client Trait
// ============================================================================

/// A collaborator that performs the actual HTTP exchange.
///
/// Implementations must not retry and must return exactly one raw response
/// per request.
#[async_trait::async_trait]
pub trait TransportClient: Send + Sync {
    /// Sends `request` and returns the raw JSON response.
    async fn fetch(&self, request: RemoteRequest) -> Value;

    /// Returns the transport type.
    fn transport_type(&self) -> Transport;

    /// Returns request counters.
    fn stats(&self) -> TransportStats;
}
