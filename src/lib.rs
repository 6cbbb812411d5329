//! # Bridge SDK
//!
//! Typed Rust client for Bridge backend APIs.
//!
//! Every remote call resolves to an [`Envelope`]: either the operation's
//! success payload or one error from its closed error set. Calls do not
//! return `Err`; transport failures arrive as the set's `Transport` error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bridge_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::builder()
//!         .url("https://bridge.example.com")
//!         .build()?;
//!
//!     match client.projects().get_mine("session-token").limit(10).await {
//!         Envelope::Data(page) => {
//!             for project in page.iter() {
//!                 println!("{} ({})", project.name, project.provider);
//!             }
//!         }
//!         Envelope::Error(GetMineError::ExpiredToken { .. }) => {
//!             println!("please sign in again");
//!         }
//!         Envelope::Error(err) => println!("request failed: {}", err),
//!     }
//!
//!     // Or convert to a Result and propagate.
//!     let project = client
//!         .projects()
//!         .re_compile("6650f0c2", "session-token")
//!         .await
//!         .into_result()?;
//!     println!("pending: {}", project.pending_compilation);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Envelope**: exactly one of data or error, decided by whether the
//!   response carries an `error` object with a numeric `status`
//! - **Operation**: a fixed method and path with typed query, body,
//!   headers, output, and error set; [`Client::call`] runs any of them
//! - **No retries**: each call sends exactly one request
//!
//! ## Features
//!
//! - `rest` (default): REST transport via reqwest
//! - `rustls` (default): use rustls for TLS
//! - `native-tls`: use native TLS (OpenSSL on Linux, Secure Transport on macOS)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod operation;

// Operations
pub mod project;

// Transport layer
pub mod transport;

// Testing utilities
pub mod testing;

// Prelude for convenient imports
pub mod prelude;

#[cfg(feature = "rest")]
mod user_agent;

// Re-export main types at crate root for convenience
pub use client::{Client, ClientBuilder};
pub use envelope::Envelope;
pub use error::{Error, ErrorKind, RemoteError, Result, UndeclaredError};
pub use operation::{CallInput, Method, Operation, TokenHeaders};

// Re-export config types
pub use config::{PoolConfig, TlsConfig};

// Re-export transport types
pub use transport::{RemoteRequest, Transport, TransportClient, TransportStats};
