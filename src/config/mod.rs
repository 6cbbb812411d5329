//! Configuration types for the Bridge SDK.
//!
//! - [`TlsConfig`]: custom CA certificates and verification settings
//! - [`PoolConfig`]: HTTP connection pool and connect timeout
//!
//! Calls are never retried and responses are never cached, so there is no
//! retry or cache configuration.

mod pool;
mod tls;

pub use pool::PoolConfig;
pub use tls::TlsConfig;
