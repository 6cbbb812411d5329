//! TLS configuration for connections to the bridge backend.

use std::path::PathBuf;

/// TLS settings for the REST transport.
///
/// By default the system roots are trusted and server certificates are
/// verified. Self-hosted bridge deployments behind a private CA can add
/// their root here.
///
/// ```rust
/// use bridge_sdk::TlsConfig;
///
/// let config = TlsConfig::builder()
///     .ca_cert_file("/etc/bridge/ca.crt")
///     .build();
/// assert!(config.has_custom_ca());
/// ```
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct TlsConfig {
    /// Extra CA certificate, read from a PEM file.
    #[builder(into)]
    pub ca_cert_file: Option<PathBuf>,

    /// Extra CA certificate as PEM text.
    #[builder(into)]
    pub ca_cert_pem: Option<String>,

    /// Accept any server certificate.
    ///
    /// **WARNING**: only for local development against self-signed servers.
    #[builder(default = false)]
    pub skip_verification: bool,
}

impl TlsConfig {
    /// Returns a config that skips certificate verification.
    pub fn insecure() -> Self {
        Self::builder().skip_verification(true).build()
    }

    /// Returns `true` if an extra CA is configured.
    pub fn has_custom_ca(&self) -> bool {
        self.ca_cert_file.is_some() || self.ca_cert_pem.is_some()
    }

    /// Loads the configured CA certificates as PEM bytes.
    pub(crate) fn ca_certificates(&self) -> crate::Result<Vec<Vec<u8>>> {
        let mut pems = Vec::new();
        if let Some(path) = &self.ca_cert_file {
            let pem = std::fs::read(path).map_err(|e| {
                crate::Error::configuration(format!(
                    "failed to read CA certificate {}: {}",
                    path.display(),
                    e
                ))
                .with_source(e)
            })?;
            pems.push(pem);
        }
        if let Some(pem) = &self.ca_cert_pem {
            pems.push(pem.as_bytes().to_vec());
        }
        Ok(pems)
    }
}
