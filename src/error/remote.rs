//! Remote error sets: the `{ name, status, data? }` failures a Bridge
//! server (or the transport in front of it) reports for an operation.
//!
//! Every variant keeps the error object exactly as received and serializes
//! back to it unchanged.
//!
//! Each operation declares a closed set of named errors with a fixed status.
//! The `remote_error_set!` macro turns such a declaration into an enum and
//! adds the variants every set shares:
//!
//! - `Transport`: `Axios Error` (400), the request never produced a
//!   decodable response;
//! - `Internal`: `Internal Server Error` (500);
//! - `Undeclared`: a numeric-status error object outside the declared set,
//!   kept verbatim.

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::ErrorKind;

/// Wire name of the transport-level failure.
pub const TRANSPORT_ERROR_NAME: &str = "Axios Error";

/// Status of the transport-level failure.
pub const TRANSPORT_ERROR_STATUS: u16 = 400;

/// Wire name of the catch-all server failure.
pub const INTERNAL_ERROR_NAME: &str = "Internal Server Error";

/// Status of the catch-all server failure.
pub const INTERNAL_ERROR_STATUS: u16 = 500;

/// A typed, closed set of remote failures for one operation.
///
/// Implemented by every enum generated with `remote_error_set!`.
pub trait RemoteError:
    Serialize + DeserializeOwned + fmt::Debug + fmt::Display + Clone + Send + Sync + 'static
{
    /// The declared `(name, status)` pairs, shared variants included.
    fn declared() -> &'static [(&'static str, u16)];

    /// Decodes an error object. Objects whose `(name, status)` pair is not
    /// declared become the `Undeclared` variant.
    fn from_wire(raw: Value) -> Self;

    /// Builds the transport-level failure carrying `data`.
    fn transport(data: Value) -> Self;

    /// The literal error name.
    fn name(&self) -> &str;

    /// The status code.
    fn status(&self) -> u16;

    /// The free-form payload, if any.
    fn data(&self) -> Option<&Value>;

    /// The error object as received.
    fn raw(&self) -> &Value;

    /// Returns `false` for errors outside the declared set.
    fn is_declared(&self) -> bool;

    /// Category derived from the status code.
    fn kind(&self) -> ErrorKind {
        ErrorKind::from_http_status(self.status())
    }
}

/// Returns `true` if `raw` is an object whose `status` field is a number.
///
/// This is the test that separates failures from success payloads.
pub fn has_numeric_status(raw: &Value) -> bool {
    raw.get("status").is_some_and(Value::is_number)
}

/// Builds an error object `{ name, status, data? }`.
pub fn error_object(name: &str, status: u16, data: Option<Value>) -> Value {
    let mut object = serde_json::Map::new();
    object.insert("name".to_owned(), Value::from(name));
    object.insert("status".to_owned(), Value::from(status));
    if let Some(data) = data {
        object.insert("data".to_owned(), data);
    }
    Value::Object(object)
}

/// Returns `true` if the JSON number `status` equals `code`.
pub fn status_matches(status: &Value, code: u16) -> bool {
    status.as_f64() == Some(f64::from(code))
}

/// An error object outside an operation's declared set.
///
/// The raw object is kept as received so it can be inspected or forwarded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UndeclaredError {
    raw: Value,
}

impl UndeclaredError {
    /// Wraps a raw error object.
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The `name` field, or an empty string when missing.
    pub fn name(&self) -> &str {
        self.raw.get("name").and_then(Value::as_str).unwrap_or("")
    }

    /// The `status` field as a `u16`.
    ///
    /// Falls back to 500 when the status is not an integer in range.
    pub fn status(&self) -> u16 {
        self.raw
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
            .unwrap_or(INTERNAL_ERROR_STATUS)
    }

    /// The `data` field, if present.
    pub fn data(&self) -> Option<&Value> {
        self.raw.get("data")
    }

    /// The raw error object.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consumes the wrapper, returning the raw error object.
    pub fn into_raw(self) -> Value {
        self.raw
    }
}

/// Declares a remote error set.
///
/// ```rust,ignore
/// remote_error_set! {
///     /// Errors of `POST /project/getMine`.
///     pub enum GetMineError {
///         /// Token is valid but lacks the permission.
///         WrongPermission = ("Wrong permission", 401),
///         InvalidToken = ("Invalid token", 401),
///     }
/// }
/// ```
macro_rules! remote_error_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = ($wire:literal, $status:literal)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant {
                    /// The error object as received.
                    raw: ::serde_json::Value,
                },
            )*
            /// `Axios Error` (400): the request produced no decodable response.
            Transport {
                /// The error object; failure details sit under `data`.
                raw: ::serde_json::Value,
            },
            /// `Internal Server Error` (500).
            Internal {
                /// The error object as received.
                raw: ::serde_json::Value,
            },
            /// An error object outside the declared set.
            Undeclared($crate::error::UndeclaredError),
        }

        impl $crate::error::RemoteError for $name {
            fn declared() -> &'static [(&'static str, u16)] {
                &[
                    $(($wire, $status),)*
                    (
                        $crate::error::TRANSPORT_ERROR_NAME,
                        $crate::error::TRANSPORT_ERROR_STATUS,
                    ),
                    (
                        $crate::error::INTERNAL_ERROR_NAME,
                        $crate::error::INTERNAL_ERROR_STATUS,
                    ),
                ]
            }

            fn from_wire(raw: ::serde_json::Value) -> Self {
                let name = raw.get("name").and_then(::serde_json::Value::as_str);
                let status = raw.get("status");
                match (name, status) {
                    $(
                        (Some($wire), Some(status))
                            if $crate::error::status_matches(status, $status) =>
                        {
                            Self::$variant { raw }
                        },
                    )*
                    (Some($crate::error::TRANSPORT_ERROR_NAME), Some(status))
                        if $crate::error::status_matches(
                            status,
                            $crate::error::TRANSPORT_ERROR_STATUS,
                        ) =>
                    {
                        Self::Transport { raw }
                    },
                    (Some($crate::error::INTERNAL_ERROR_NAME), Some(status))
                        if $crate::error::status_matches(
                            status,
                            $crate::error::INTERNAL_ERROR_STATUS,
                        ) =>
                    {
                        Self::Internal { raw }
                    },
                    _ => Self::Undeclared($crate::error::UndeclaredError::new(raw)),
                }
            }

            fn transport(data: ::serde_json::Value) -> Self {
                Self::Transport {
                    raw: $crate::error::error_object(
                        $crate::error::TRANSPORT_ERROR_NAME,
                        $crate::error::TRANSPORT_ERROR_STATUS,
                        Some(data),
                    ),
                }
            }

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant { .. } => $wire,)*
                    Self::Transport { .. } => $crate::error::TRANSPORT_ERROR_NAME,
                    Self::Internal { .. } => $crate::error::INTERNAL_ERROR_NAME,
                    Self::Undeclared(err) => err.name(),
                }
            }

            fn status(&self) -> u16 {
                match self {
                    $(Self::$variant { .. } => $status,)*
                    Self::Transport { .. } => $crate::error::TRANSPORT_ERROR_STATUS,
                    Self::Internal { .. } => $crate::error::INTERNAL_ERROR_STATUS,
                    Self::Undeclared(err) => err.status(),
                }
            }

            fn data(&self) -> Option<&::serde_json::Value> {
                <Self as $crate::error::RemoteError>::raw(self).get("data")
            }

            fn raw(&self) -> &::serde_json::Value {
                match self {
                    $(Self::$variant { raw } => raw,)*
                    Self::Transport { raw } | Self::Internal { raw } => raw,
                    Self::Undeclared(err) => err.raw(),
                }
            }

            fn is_declared(&self) -> bool {
                !matches!(self, Self::Undeclared(_))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use $crate::error::RemoteError;

                ::serde::Serialize::serialize(self.raw(), serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                if !raw.is_object() {
                    return Err(::serde::de::Error::custom("expected an error object"));
                }
                Ok(<Self as $crate::error::RemoteError>::from_wire(raw))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use $crate::error::RemoteError;
                write!(f, "{} ({})", self.name(), self.status())
            }
        }

        impl ::std::error::Error for $name {}

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                use $crate::error::RemoteError;
                $crate::Error::new(err.kind(), err.name().to_owned()).with_status(err.status())
            }
        }
    };
}

pub(crate) use remote_error_set;
