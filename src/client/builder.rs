//! Client builder with typestate pattern.

use std::{marker::PhantomData, sync::Arc, time::Duration};

use url::Url;

use super::inner::ClientInner;
#[cfg(feature = "rest")]
use crate::transport::RestTransport;
use crate::{
    Client, Error,
    config::{PoolConfig, TlsConfig},
    transport::TransportClient,
};

/// Default upper bound on one call.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Marker type: URL not yet provided.
pub struct NoUrl;

/// Marker type: URL has been provided.
pub struct HasUrl;

/// Builder for creating [`Client`] instances.
///
/// The server URL is required and enforced at compile time: `build()` only
/// exists once `url()` has been called.
///
/// ## Optional Configuration
///
/// - `timeout()`: upper bound on one call (default 30 s)
/// - `tls_config()`: custom CA certificates
/// - `pool_config()`: connection pool settings
/// - `insecure()`: allow plain HTTP and skip certificate verification
///
/// ## Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use bridge_sdk::Client;
///
/// # fn main() -> Result<(), bridge_sdk::Error> {
/// let client = Client::builder()
///     .url("https://bridge.example.com")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder<UrlState> {
    url: Option<String>,
    tls_config: TlsConfig,
    pool_config: PoolConfig,
    timeout: Duration,
    _url_state: PhantomData<UrlState>,
}

impl ClientBuilder<NoUrl> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            url: None,
            tls_config: TlsConfig::default(),
            pool_config: PoolConfig::default(),
            timeout: DEFAULT_TIMEOUT,
            _url_state: PhantomData,
        }
    }

    /// Sets the bridge server URL, e.g. `https://bridge.example.com`.
    ///
    /// A path on the URL is kept: operation paths are resolved below it.
    pub fn url(self, url: impl Into<String>) -> ClientBuilder<HasUrl> {
        ClientBuilder {
            url: Some(url.into()),
            tls_config: self.tls_config,
            pool_config: self.pool_config,
            timeout: self.timeout,
            _url_state: PhantomData,
        }
    }
}

impl Default for ClientBuilder<NoUrl> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> ClientBuilder<U> {
    /// Sets the TLS configuration.
    ///
    /// ```rust
    /// use bridge_sdk::{Client, TlsConfig};
    ///
    /// let builder = Client::builder()
    ///     .tls_config(TlsConfig::builder().ca_cert_file("/etc/bridge/ca.crt").build());
    /// ```
    #[must_use]
    pub fn tls_config(mut self, config: TlsConfig) -> Self {
        self.tls_config = config;
        self
    }

    /// Sets the connection pool configuration.
    #[must_use]
    pub fn pool_config(mut self, config: PoolConfig) -> Self {
        self.pool_config = config;
        self
    }

    /// Disables TLS certificate verification and allows HTTP connections.
    ///
    /// **WARNING**: only for local development.
    #[must_use]
    pub fn insecure(mut self) -> Self {
        self.tls_config.skip_verification = true;
        self
    }

    /// Sets the request timeout of the REST transport.
    ///
    /// A call that exceeds it resolves to the operation's transport error.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl ClientBuilder<HasUrl> {
    fn parse_url(&self) -> Result<Url, Error> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| Error::configuration("URL is required"))?;
        Ok(Url::parse(url)?)
    }

    /// Builds the client with a custom transport.
    ///
    /// The URL is parsed but no scheme is enforced; the transport decides
    /// where requests go and owns any timeout. The builder's `timeout()`,
    /// `tls_config()` and `pool_config()` apply to `build()` only.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use bridge_sdk::{Client, testing::MockTransport};
    ///
    /// let client = Client::builder()
    ///     .url("https://bridge.test")
    ///     .build_with_transport(Arc::new(MockTransport::new()))
    ///     .unwrap();
    /// assert!(client.transport_type().is_mock());
    /// ```
    pub fn build_with_transport(
        self,
        transport: Arc<dyn TransportClient>,
    ) -> Result<Client, Error> {
        let url = self.parse_url()?;
        Ok(Client::from_inner(ClientInner {
            url,
            transport,
        }))
    }

    /// Builds the client over the REST transport.
    ///
    /// # Errors
    ///
    /// Returns a [`Configuration`](crate::ErrorKind::Configuration) error if:
    /// - The URL is invalid
    /// - The URL is not HTTPS and `insecure()` was not set
    /// - A configured CA certificate cannot be read or parsed
    #[cfg(feature = "rest")]
    pub fn build(self) -> Result<Client, Error> {
        let url = self.parse_url()?;

        if url.scheme() != "https" && !self.tls_config.skip_verification {
            return Err(Error::configuration(
                "HTTPS is required. Use .insecure() for development with HTTP.",
            ));
        }

        let transport = RestTransport::new(
            url.clone(),
            &self.tls_config,
            &self.pool_config,
            self.timeout,
        )?;
        tracing::debug!(url = %url, "bridge client created");

        Ok(Client::from_inner(ClientInner {
            url,
            transport: Arc::new(transport),
        }))
    }
}
