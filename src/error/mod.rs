//! Error types for the Bridge SDK.
//!
//! The SDK separates two kinds of failure:
//! - Remote failures: each operation has a closed [`RemoteError`] set that
//!   arrives inside an [`Envelope`](crate::Envelope), never as `Err`.
//! - SDK failures: [`Error`] with an [`ErrorKind`], raised while building a
//!   client, or produced on demand from a remote error for `?` use.
//!
//! ```rust,ignore
//! // The call itself never fails; inspect the envelope.
//! match client.projects().get_mine("token").await {
//!     Envelope::Data(page) => println!("{} projects", page.total),
//!     Envelope::Error(err) => println!("{} ({})", err.name(), err.status()),
//! }
//!
//! // Or convert to Result and propagate.
//! let page = client.projects().get_mine("token").await.into_result()?;
//! ```

#[allow(clippy::module_inception)]
mod error;
mod kind;
mod remote;

pub use error::Error;
pub use kind::ErrorKind;
pub use remote::{
    INTERNAL_ERROR_NAME, INTERNAL_ERROR_STATUS, RemoteError, TRANSPORT_ERROR_NAME,
    TRANSPORT_ERROR_STATUS, UndeclaredError, error_object, has_numeric_status, status_matches,
};
pub(crate) use remote::remote_error_set;

/// A specialized `Result` type for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;
