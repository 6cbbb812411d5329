//! REST transport implementation using reqwest.
//!
//! Sends one JSON request per call and normalizes whatever comes back into
//! a raw response value: the success body as-is, an error object wrapped
//! under `error`, or a transport failure object.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Value, json};
use url::Url;

use crate::Error;
use crate::config::{PoolConfig, TlsConfig};
use crate::operation::Method;
use crate::transport::traits::{
    RemoteRequest, Transport, TransportClient, TransportStats, error_response, transport_failure,
};
use crate::user_agent;

// ============================================================================
// REST Transport
// ============================================================================

/// REST transport using reqwest.
#[derive(Clone)]
pub struct RestTransport {
    client: reqwest::Client,
    base_url: Url,
    stats: Arc<RwLock<TransportStats>>,
}

impl std::fmt::Debug for RestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl RestTransport {
    /// Creates a new REST transport builder.
    pub fn builder() -> RestTransportBuilder {
        RestTransportBuilder::new()
    }

    /// Creates a new REST transport with the given configuration.
    pub fn new(
        base_url: Url,
        tls_config: &TlsConfig,
        pool_config: &PoolConfig,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let mut client_builder = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(pool_config.connect_timeout)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout)
            .user_agent(user_agent::user_agent());

        if tls_config.skip_verification {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        for pem in tls_config.ca_certificates()? {
            let cert = reqwest::Certificate::from_pem(&pem).map_err(|e| {
                Error::configuration(format!("invalid CA certificate: {}", e)).with_source(e)
            })?;
            client_builder = client_builder.add_root_certificate(cert);
        }

        let client = client_builder.build().map_err(|e| {
            Error::configuration(format!("failed to create HTTP client: {}", e)).with_source(e)
        })?;

        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
            stats: Arc::new(RwLock::new(TransportStats::default())),
        })
    }

    /// Returns the base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves the request path and query against the base URL.
    fn build_url(&self, request: &RemoteRequest) -> Result<Url, String> {
        let mut url = self
            .base_url
            .join(request.path.trim_start_matches('/'))
            .map_err(|e| format!("invalid request path {:?}: {}", request.path, e))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }

    /// Builds the header map for a request.
    fn build_headers(&self, request: &RemoteRequest) -> Result<HeaderMap, String> {
        let mut headers = HeaderMap::with_capacity(request.headers.len() + 1);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        // User-Agent is set on the client in new()

        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| format!("invalid header name {:?}: {}", name, e))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| format!("invalid value for header {:?}: {}", name.as_str(), e))?;
            headers.append(name, value);
        }
        Ok(headers)
    }

    /// Sends the request and normalizes the response.
    ///
    /// `Err` carries a raw transport failure.
    async fn send(&self, request: &RemoteRequest) -> Result<Value, Value> {
        let url = self
            .build_url(request)
            .map_err(|message| transport_failure(json!({ "message": message })))?;
        let headers = self
            .build_headers(request)
            .map_err(|message| transport_failure(json!({ "message": message })))?;

        let mut builder = self
            .client
            .request(reqwest_method(request.method), url)
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, path = %request.path, "request failed before a response");
            transport_failure(json!({
                "message": e.to_string(),
                "kind": send_error_kind(&e),
            }))
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, status = status.as_u16(), "failed to read response body");
            transport_failure(json!({
                "message": e.to_string(),
                "kind": send_error_kind(&e),
                "status": status.as_u16(),
            }))
        })?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Some(Value::Null)
        } else {
            serde_json::from_slice::<Value>(&bytes).ok()
        };

        if status.is_success() {
            return body.ok_or_else(|| {
                tracing::warn!(status = status.as_u16(), "success response is not JSON");
                transport_failure(json!({
                    "message": "response body is not valid JSON",
                    "status": status.as_u16(),
                    "body": String::from_utf8_lossy(&bytes),
                }))
            });
        }

        tracing::debug!(status = status.as_u16(), "non-success response");
        Err(error_response(
            status.as_u16(),
            body,
            &String::from_utf8_lossy(&bytes),
        ))
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn send_error_kind(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connection"
    } else if err.is_body() || err.is_decode() {
        "body"
    } else if err.is_redirect() {
        "redirect"
    } else {
        "request"
    }
}

// ============================================================================
// REST Transport Builder
// ============================================================================

/// Builder for [`RestTransport`].
pub struct RestTransportBuilder {
    base_url: Option<Url>,
    tls_config: TlsConfig,
    pool_config: PoolConfig,
    timeout: Duration,
}

impl RestTransportBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            tls_config: TlsConfig::default(),
            pool_config: PoolConfig::default(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self, Error> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Sets the TLS configuration.
    pub fn tls_config(mut self, config: TlsConfig) -> Self {
        self.tls_config = config;
        self
    }

    /// Sets the connection pool configuration.
    pub fn pool_config(mut self, config: PoolConfig) -> Self {
        self.pool_config = config;
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the REST transport.
    pub fn build(self) -> Result<RestTransport, Error> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::configuration("base URL is required"))?;
        RestTransport::new(base_url, &self.tls_config, &self.pool_config, self.timeout)
    }
}

// ============================================================================
// TransportClient Implementation
// ============================================================================

#[async_trait::async_trait]
impl TransportClient for RestTransport {
    async fn fetch(&self, request: RemoteRequest) -> Value {
        self.stats.write().requests_sent += 1;
        match self.send(&request).await {
            Ok(raw) => raw,
            Err(raw) => {
                self.stats.write().requests_failed += 1;
                raw
            }
        }
    }

    fn transport_type(&self) -> Transport {
        Transport::Http
    }

    fn stats(&self) -> TransportStats {
        *self.stats.read()
    }
}
