//! Client types for calling the bridge backend.
//!
//! - [`Client`]: owns the transport, runs any [`Operation`]
//! - [`ProjectsClient`](crate::project::ProjectsClient): the project operations
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bridge_sdk::{Client, Envelope};
//!
//! # async fn example() -> Result<(), bridge_sdk::Error> {
//! let client = Client::builder()
//!     .url("https://bridge.example.com")
//!     .build()?;
//!
//! match client.projects().get_mine("session-token").limit(20).await {
//!     Envelope::Data(page) => println!("{} of {} projects", page.len(), page.total),
//!     Envelope::Error(err) => eprintln!("getMine failed: {}", err),
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod inner;

pub use builder::{ClientBuilder, HasUrl, NoUrl};

use std::sync::Arc;

use serde_json::json;
use tracing::Instrument;
use uuid::Uuid;

use crate::envelope::Envelope;
use crate::error::RemoteError;
use crate::operation::{CallInput, Operation};
use crate::project::ProjectsClient;
use crate::transport::{RemoteRequest, Transport, TransportStats, encode_pairs};

/// Header carrying the per-call correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The bridge SDK client.
///
/// `Client` is `Clone` and cheap to share across tasks; clones use the
/// same transport and connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder<NoUrl> {
        ClientBuilder::new()
    }

    /// Returns the project operations.
    pub fn projects(&self) -> ProjectsClient {
        ProjectsClient::new(self.clone())
    }

    /// Runs one remote operation and returns its envelope.
    ///
    /// This never fails: transport problems and payloads that do not
    /// decode come back as the operation's transport error. Timeouts are
    /// the transport's concern.
    ///
    /// ```rust
    /// # async fn example(client: bridge_sdk::Client) {
    /// use bridge_sdk::{CallInput, RemoteError, TokenHeaders};
    /// use bridge_sdk::project::{ReCompile, ReCompileQuery};
    ///
    /// let envelope = client
    ///     .call::<ReCompile>(CallInput::new(
    ///         ReCompileQuery::new("6650f0c2"),
    ///         TokenHeaders::new("session-token"),
    ///     ))
    ///     .await;
    /// if let Some(err) = envelope.error() {
    ///     eprintln!("{} ({})", err.name(), err.status());
    /// }
    /// # }
    /// ```
    pub async fn call<O: Operation>(&self, input: CallInput<O>) -> Envelope<O::Output, O::Error> {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!(
            "bridge.call",
            method = %O::METHOD,
            path = O::PATH,
            request_id = %request_id
        );

        async move {
            let request = match build_request(&input, request_id) {
                Ok(request) => request,
                Err(err) => {
                    tracing::warn!(error = %err, "failed to encode request");
                    return Envelope::Error(O::Error::transport(json!({
                        "message": err.to_string(),
                    })));
                }
            };

            tracing::debug!("dispatching request");
            let raw = self.inner.transport.fetch(request).await;

            let envelope: Envelope<O::Output, O::Error> = Envelope::from_response(raw);
            match &envelope {
                Envelope::Data(_) => tracing::debug!("call returned data"),
                Envelope::Error(err) => tracing::debug!(
                    error.name = err.name(),
                    error.status = err.status(),
                    "call returned an error"
                ),
            }
            envelope
        }
        .instrument(span)
        .await
    }

    /// Returns the server URL.
    pub fn url(&self) -> &str {
        self.inner.url.as_str()
    }

    /// Returns the transport type in use.
    pub fn transport_type(&self) -> Transport {
        self.inner.transport.transport_type()
    }

    /// Returns the transport's request counters.
    pub fn stats(&self) -> TransportStats {
        self.inner.transport.stats()
    }

    pub(crate) fn from_inner(inner: inner::ClientInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("url", &self.inner.url.as_str())
            .field("transport", &self.transport_type())
            .finish_non_exhaustive()
    }
}

fn build_request<O: Operation>(
    input: &CallInput<O>,
    request_id: Uuid,
) -> crate::Result<RemoteRequest> {
    let mut request = RemoteRequest::new(O::METHOD, O::PATH);
    request.query = encode_pairs(&input.query)?;
    request.headers = encode_pairs(&input.headers)?;
    request
        .headers
        .push((REQUEST_ID_HEADER.to_owned(), request_id.to_string()));

    let body = serde_json::to_value(&input.body)?;
    request.body = (!body.is_null()).then_some(body);
    Ok(request)
}
