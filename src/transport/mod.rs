//! Transport layer for bridge communication.
//!
//! - REST transport (via reqwest), behind the `rest` feature
//! - Mock transport, for testing without network
//!
//! Users normally interact with [`Client`](crate::Client); implement
//! [`TransportClient`] to plug in a different HTTP stack.
//!
//! ```rust
//! use bridge_sdk::Transport;
//!
//! let http = Transport::Http; // default
//! let mock = Transport::Mock;
//! assert_ne!(http, mock);
//! ```

pub(crate) mod traits;

#[cfg(feature = "rest")]
pub(crate) mod rest;

pub(crate) mod mock;

pub use traits::{RemoteRequest, Transport, TransportClient, TransportStats};
pub(crate) use traits::encode_pairs;

#[cfg(feature = "rest")]
pub use rest::{RestTransport, RestTransportBuilder};

pub use mock::MockTransport;
