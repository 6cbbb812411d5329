//! The result envelope returned by every remote call.
//!
//! On the wire an envelope is `{ "data": T, "error": null }` or
//! `{ "data": null, "error": E }`. In Rust it is a two-variant enum, so
//! exactly one side is present by construction.
//!
//! ## Discrimination
//!
//! [`Envelope::from_response`] turns a raw transport response into an
//! envelope:
//!
//! 1. If the response has an `error` field whose `status` is a number, the
//!    call failed and the error object is decoded into the operation's error
//!    set.
//! 2. Otherwise the whole response is decoded as the success payload.
//!
//! A success payload that does not match the expected type is reported as
//! the transport-level error, so the function is total.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::error::{RemoteError, has_numeric_status};

/// Outcome of a remote call: typed data or a typed remote error.
///
/// ## Example
///
/// ```rust
/// use bridge_sdk::Envelope;
///
/// let ok: Envelope<u32, String> = Envelope::Data(7);
/// assert!(ok.is_data());
/// assert_eq!(ok.into_result(), Ok(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an envelope may carry a remote error that should be handled"]
pub enum Envelope<T, E> {
    /// The call succeeded.
    Data(T),
    /// The call failed with a remote error.
    Error(E),
}

impl<T, E> Envelope<T, E> {
    /// Returns `true` for the success side.
    pub fn is_data(&self) -> bool {
        matches!(self, Envelope::Data(_))
    }

    /// Returns `true` for the failure side.
    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Error(_))
    }

    /// Returns the success payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Envelope::Data(data) => Some(data),
            Envelope::Error(_) => None,
        }
    }

    /// Returns the remote error, if any.
    pub fn error(&self) -> Option<&E> {
        match self {
            Envelope::Data(_) => None,
            Envelope::Error(err) => Some(err),
        }
    }

    /// Consumes the envelope, returning the success payload.
    pub fn into_data(self) -> Option<T> {
        match self {
            Envelope::Data(data) => Some(data),
            Envelope::Error(_) => None,
        }
    }

    /// Consumes the envelope, returning the remote error.
    pub fn into_error(self) -> Option<E> {
        match self {
            Envelope::Data(_) => None,
            Envelope::Error(err) => Some(err),
        }
    }

    /// Converts into a `Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Envelope::Data(data) => Ok(data),
            Envelope::Error(err) => Err(err),
        }
    }

    /// Maps the success payload.
    pub fn map<U, F>(self, f: F) -> Envelope<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Envelope::Data(data) => Envelope::Data(f(data)),
            Envelope::Error(err) => Envelope::Error(err),
        }
    }

    /// Maps the remote error.
    pub fn map_error<F2, F>(self, f: F) -> Envelope<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Envelope::Data(data) => Envelope::Data(data),
            Envelope::Error(err) => Envelope::Error(f(err)),
        }
    }
}

impl<T, E> Envelope<T, E>
where
    T: DeserializeOwned,
    E: RemoteError,
{
    /// Classifies a raw transport response.
    ///
    /// ```rust,ignore
    /// let raw = json!({ "error": { "name": "Invalid token", "status": 401 } });
    /// let envelope = Envelope::<Project, ReCompileError>::from_response(raw);
    /// assert!(matches!(envelope, Envelope::Error(ReCompileError::InvalidToken { .. })));
    /// ```
    pub fn from_response(mut raw: Value) -> Self {
        if raw.get("error").is_some_and(has_numeric_status) {
            let error = raw.get_mut("error").map(Value::take).unwrap_or_default();
            return Envelope::Error(E::from_wire(error));
        }

        if let Some(stray) = raw.get("error").filter(|e| !e.is_null()) {
            tracing::warn!(
                error = %stray,
                "response carries an `error` field without a numeric status; treating as data"
            );
        }

        match T::deserialize(&raw) {
            Ok(data) => Envelope::Data(data),
            Err(err) => {
                tracing::warn!(error = %err, "response does not match the expected payload");
                Envelope::Error(E::transport(json!({
                    "message": format!("failed to decode response: {}", err),
                    "body": raw,
                })))
            }
        }
    }
}

impl<T, E> From<Envelope<T, E>> for Result<T, E> {
    fn from(envelope: Envelope<T, E>) -> Self {
        envelope.into_result()
    }
}

impl<T, E> From<Result<T, E>> for Envelope<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Envelope::Data(data),
            Err(err) => Envelope::Error(err),
        }
    }
}

impl<T, E> fmt::Display for Envelope<T, E>
where
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Envelope::Data(_) => write!(f, "data"),
            Envelope::Error(err) => write!(f, "error: {}", err),
        }
    }
}

#[derive(Serialize)]
struct WireRef<'a, T, E> {
    data: Option<&'a T>,
    error: Option<&'a E>,
}

#[derive(Deserialize)]
struct WireOwned<T, E> {
    data: Option<T>,
    error: Option<E>,
}

impl<T, E> Serialize for Envelope<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        WireRef {
            data: self.data(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Envelope<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireOwned::<T, E>::deserialize(deserializer)?;
        match (wire.data, wire.error) {
            (Some(data), None) => Ok(Envelope::Data(data)),
            (None, Some(err)) => Ok(Envelope::Error(err)),
            (Some(_), Some(_)) => Err(serde::de::Error::custom(
                "envelope carries both `data` and `error`",
            )),
            (None, None) => Err(serde::de::Error::custom(
                "envelope carries neither `data` nor `error`",
            )),
        }
    }
}
