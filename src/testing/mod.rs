//! Testing utilities for code that uses the Bridge SDK.
//!
//! - [`MockTransport`]: queued raw responses, recorded requests
//! - [`success`], [`failure`], [`failure_with_data`]: raw response builders
//! - [`mock_client`]: a [`Client`] wired to a mock transport
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use bridge_sdk::testing::{MockTransport, failure, mock_client};
//! use bridge_sdk::project::GetMineError;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mock = Arc::new(MockTransport::new().with_response(failure("Expired token", 401)));
//! let client = mock_client(mock.clone()).unwrap();
//!
//! let envelope = client.projects().get_mine("stale-token").await;
//! assert!(matches!(envelope.error(), Some(GetMineError::ExpiredToken { .. })));
//! assert_eq!(mock.last_request().unwrap().header("token"), Some("stale-token"));
//! # }
//! ```

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Value, json};

use crate::Client;

pub use crate::transport::MockTransport;

/// Builds a raw success response carrying `data`.
///
/// # Errors
///
/// Returns the serialization error if `data` does not serialize to JSON.
pub fn success<T: Serialize>(data: T) -> serde_json::Result<Value> {
    serde_json::to_value(data)
}

/// Builds a raw failure response `{ error: { name, status } }`.
pub fn failure(name: &str, status: u16) -> Value {
    json!({ "error": { "name": name, "status": status } })
}

/// Builds a raw failure response `{ error: { name, status, data } }`.
pub fn failure_with_data(name: &str, status: u16, data: Value) -> Value {
    json!({ "error": { "name": name, "status": status, "data": data } })
}

/// Server URL reported by clients from [`mock_client`].
pub const MOCK_URL: &str = "https://bridge.mock";

/// Returns a client whose calls go to `transport`.
pub fn mock_client(transport: Arc<MockTransport>) -> crate::Result<Client> {
    Client::builder()
        .url(MOCK_URL)
        .build_with_transport(transport)
}
