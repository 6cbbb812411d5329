//! Prelude module for convenient imports.
//!
//! ```rust
//! use bridge_sdk::prelude::*;
//! ```
//!
//! This provides access to:
//! - Client types
//! - The envelope and error types
//! - Project operations and records

pub use crate::{
    client::{Client, ClientBuilder},
    config::TlsConfig,
    envelope::Envelope,
    error::{Error, ErrorKind, RemoteError, Result},
    operation::{CallInput, Operation, TokenHeaders},
    project::{
        GetMineError, Language, Paginated, Project, ProjectsClient, Provider, ReCompileError,
    },
};
