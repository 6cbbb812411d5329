//! HTTP connection pool configuration.

use std::time::Duration;

/// Connection pool settings for the REST transport.
///
/// ```rust
/// use std::time::Duration;
/// use bridge_sdk::PoolConfig;
///
/// let pool = PoolConfig::builder()
///     .max_idle_per_host(4)
///     .idle_timeout(Duration::from_secs(30))
///     .build();
/// assert_eq!(pool.max_idle_per_host, 4);
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct PoolConfig {
    /// Maximum idle connections kept per host.
    #[builder(default = 10)]
    pub max_idle_per_host: usize,

    /// How long an idle connection is kept open.
    #[builder(default = Duration::from_secs(90))]
    pub idle_timeout: Duration,

    /// Timeout for establishing a connection.
    #[builder(default = Duration::from_secs(10))]
    pub connect_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
