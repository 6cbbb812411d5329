//! Internal client state.

use std::sync::Arc;

use url::Url;

use crate::transport::TransportClient;

pub(crate) struct ClientInner {
    /// Bridge server URL.
    pub url: Url,

    /// Performs the HTTP exchange.
    pub transport: Arc<dyn TransportClient>,
}
