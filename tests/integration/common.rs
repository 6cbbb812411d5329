//! Common test harness for Bridge SDK integration tests.

use std::sync::Once;

use anyhow::{Context, Result};
use bridge_sdk::Client;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Session token the fixtures send.
pub const TOKEN: &str = "integration-token";

static TRACING: Once = Once::new();

/// Installs a test subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A fake bridge backend and a client pointed at it.
pub struct TestFixture {
    pub server: MockServer,
    pub client: Client,
}

impl TestFixture {
    /// Starts a server and builds a REST client for it.
    pub async fn create() -> Result<Self> {
        init_tracing();
        let server = MockServer::start().await;
        let client = Client::builder()
            .url(server.uri())
            .insecure()
            .build()
            .context("failed to build client for mock server")?;
        Ok(Self { server, client })
    }

    /// Answers `POST <route>` with `status` and a JSON body.
    pub async fn respond(&self, route: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answers `POST <route>` with `status` and a raw text body.
    pub async fn respond_text(&self, route: &str, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Returns the requests the server received.
    pub async fn received(&self) -> Result<Vec<wiremock::Request>> {
        self.server
            .received_requests()
            .await
            .context("request recording is disabled")
    }
}

/// A project document as the bridge returns it.
pub fn project_json(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "createdAt": "2024-05-24T10:00:00.000Z",
        "name": name,
        "owner": "user_1",
        "serverUrl": format!("https://{}.example.com", name),
        "provider": "github",
        "subscribedLanguages": ["python", "typescript"],
        "lastCompilationSuccess": true,
        "pendingCompilation": false,
        "githubRepo": {
            "id": 812345,
            "name": name,
            "owner": "acme",
            "full_name": format!("acme/{}", name),
            "visibility": "public",
            "createdAt": "2024-05-20T08:30:00.000Z"
        }
    })
}

/// A page of projects as `getMine` returns it.
pub fn page_json(ids: &[&str], total: u64, skip: u64, limit: u64) -> Value {
    json!({
        "data": ids.iter().map(|id| project_json(id, id)).collect::<Vec<_>>(),
        "total": total,
        "skip": skip,
        "limit": limit
    })
}
