//! Client construction and transport plumbing.

use std::time::Duration;

use bridge_sdk::project::GetMineError;
use bridge_sdk::{Client, ErrorKind, PoolConfig, RemoteError, TlsConfig};
use serde_json::json;
use wiremock::matchers::{header_regex, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TOKEN, TestFixture, page_json};

#[tokio::test]
async fn test_user_agent_and_request_id_headers() {
    let fixture = TestFixture::create().await.expect("fixture");

    Mock::given(method("POST"))
        .and(path("/project/getMine"))
        .and(header_regex("user-agent", r"^bridge-sdk-rust/\d+\.\d+\.\d+ \(.+\)$"))
        .and(header_regex(
            "x-request-id",
            r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&[], 0, 0, 10)))
        .expect(1)
        .mount(&fixture.server)
        .await;

    assert!(fixture.client.projects().get_mine(TOKEN).await.is_data());
}

#[tokio::test]
async fn test_stats_count_requests() {
    let fixture = TestFixture::create().await.expect("fixture");
    fixture
        .respond("/project/getMine", 200, page_json(&[], 0, 0, 10))
        .await;
    fixture
        .respond(
            "/project/reCompile",
            404,
            json!({ "name": "Document not found", "status": 404 }),
        )
        .await;

    fixture.client.projects().get_mine(TOKEN).await;
    fixture.client.projects().re_compile("p1", TOKEN).await;

    let stats = fixture.client.stats();
    assert_eq!(stats.requests_sent, 2);
    assert_eq!(stats.requests_failed, 1);
    assert_eq!(stats.requests_succeeded(), 1);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let fixture = TestFixture::create().await.expect("fixture");

    Mock::given(method("POST"))
        .and(path("/project/getMine"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(&[], 0, 0, 10))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&fixture.server)
        .await;

    let client = Client::builder()
        .url(fixture.server.uri())
        .insecure()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("client");

    let err = client
        .projects()
        .get_mine(TOKEN)
        .await
        .into_error()
        .expect("error");
    assert!(matches!(err, GetMineError::Transport { .. }));
    assert_eq!(err.data().expect("data")["kind"], "timeout");
}

#[tokio::test]
async fn test_base_path_is_preserved() {
    let fixture = TestFixture::create().await.expect("fixture");
    fixture
        .respond("/api/v1/project/getMine", 200, page_json(&[], 0, 0, 10))
        .await;

    let client = Client::builder()
        .url(format!("{}/api/v1", fixture.server.uri()))
        .insecure()
        .build()
        .expect("client");

    assert!(client.projects().get_mine(TOKEN).await.is_data());
}

#[test]
fn test_https_required_without_insecure() {
    let err = Client::builder()
        .url("http://bridge.example.com")
        .build()
        .expect_err("plain HTTP must be rejected");
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_custom_configuration_builds() {
    let client = Client::builder()
        .url("https://bridge.example.com")
        .timeout(Duration::from_secs(5))
        .pool_config(PoolConfig::builder().max_idle_per_host(1).build())
        .tls_config(TlsConfig::default())
        .build()
        .expect("client");
    assert_eq!(client.url(), "https://bridge.example.com/");
}
