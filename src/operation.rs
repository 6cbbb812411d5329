//! Remote operation descriptors.
//!
//! An [`Operation`] names one remote procedure: its fixed method and path,
//! the shapes of its query, body, and headers, its success payload, and its
//! closed error set. [`Client::call`](crate::Client::call) is the single
//! wrapper that runs any operation and returns an [`Envelope`](crate::Envelope).
//!
//! ```rust,ignore
//! use bridge_sdk::{CallInput, Client, TokenHeaders};
//! use bridge_sdk::project::{GetMine, GetMineQuery};
//!
//! let envelope = client
//!     .call::<GetMine>(CallInput::new(
//!         GetMineQuery::new().with_limit(10),
//!         TokenHeaders::new("token"),
//!     ))
//!     .await;
//! ```

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::RemoteError;

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Returns the method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remote procedure with a fixed method, path, and typed input/output.
///
/// `()` serializes to `null` and is the conventional `Query` or `Body` for
/// operations without one.
pub trait Operation {
    /// HTTP method.
    const METHOD: Method;

    /// Path relative to the server URL, e.g. `/project/getMine`.
    const PATH: &'static str;

    /// Query parameters; each field becomes one URL query parameter.
    type Query: Serialize + Send;

    /// JSON request body.
    type Body: Serialize + Send;

    /// Request headers; each field becomes one header.
    type Headers: Serialize + Send;

    /// Success payload.
    type Output: DeserializeOwned + Send;

    /// Closed set of remote errors.
    type Error: RemoteError;
}

/// Input of one call: query or body plus headers.
pub struct CallInput<O: Operation> {
    /// Query parameters.
    pub query: O::Query,
    /// Request body.
    pub body: O::Body,
    /// Request headers.
    pub headers: O::Headers,
}

impl<O> CallInput<O>
where
    O: Operation<Body = ()>,
{
    /// Creates an input for an operation without a body.
    pub fn new(query: O::Query, headers: O::Headers) -> Self {
        Self {
            query,
            body: (),
            headers,
        }
    }
}

impl<O> CallInput<O>
where
    O: Operation<Query = ()>,
{
    /// Creates an input for an operation without query parameters.
    pub fn with_body(body: O::Body, headers: O::Headers) -> Self {
        Self {
            query: (),
            body,
            headers,
        }
    }
}

impl<O: Operation> std::fmt::Debug for CallInput<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallInput")
            .field("path", &O::PATH)
            .finish_non_exhaustive()
    }
}

/// Headers carrying the session token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeaders {
    /// Session token, sent as the `token` header.
    pub token: String,
}

impl TokenHeaders {
    /// Creates headers carrying `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for TokenHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenHeaders")
            .field("token", &"<redacted>")
            .finish()
    }
}
