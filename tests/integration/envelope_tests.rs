//! Envelope discrimination over real HTTP responses.

use bridge_sdk::project::{GetMineError, Project, ReCompileError};
use bridge_sdk::{Envelope, RemoteError};
use serde_json::json;

use crate::common::{TOKEN, TestFixture, project_json};

#[tokio::test]
async fn test_plain_text_error_page_is_transport_error() {
    let fixture = TestFixture::create().await.expect("fixture");
    fixture
        .respond_text("/project/getMine", 502, "<html>Bad Gateway</html>")
        .await;

    let err = fixture
        .client
        .projects()
        .get_mine(TOKEN)
        .await
        .into_error()
        .expect("error");
    assert!(matches!(err, GetMineError::Transport { .. }));
    assert_eq!(err.name(), "Axios Error");
    assert_eq!(err.status(), 400);

    let data = err.data().expect("details");
    assert_eq!(data["status"], 502);
    assert_eq!(data["body"], "<html>Bad Gateway</html>");
}

#[tokio::test]
async fn test_internal_server_error_is_shared_variant() {
    let fixture = TestFixture::create().await.expect("fixture");
    fixture
        .respond(
            "/project/reCompile",
            500,
            json!({ "name": "Internal Server Error", "status": 500 }),
        )
        .await;

    let envelope = fixture.client.projects().re_compile("p1", TOKEN).await;
    assert!(matches!(
        envelope.error(),
        Some(ReCompileError::Internal { .. })
    ));
}

#[tokio::test]
async fn test_declared_error_keeps_every_field() {
    let fixture = TestFixture::create().await.expect("fixture");
    let error = json!({
        "name": "Invalid token",
        "status": 401.0,
        "message": "jwt malformed"
    });
    fixture
        .respond("/project/getMine", 401, json!({ "error": error.clone() }))
        .await;

    let envelope = fixture.client.projects().get_mine(TOKEN).await;
    assert!(matches!(
        envelope.error(),
        Some(GetMineError::InvalidToken { .. })
    ));

    let wire = serde_json::to_value(&envelope).expect("serialize");
    assert_eq!(wire["data"], serde_json::Value::Null);
    assert_eq!(wire["error"], error);
}

#[tokio::test]
async fn test_error_with_status_on_success_response() {
    // Some handlers answer 200 with an error envelope.
    let fixture = TestFixture::create().await.expect("fixture");
    fixture
        .respond(
            "/project/reCompile",
            200,
            json!({ "error": { "name": "Document not found", "status": 404 } }),
        )
        .await;

    let envelope = fixture.client.projects().re_compile("p1", TOKEN).await;
    assert!(matches!(
        envelope.error(),
        Some(ReCompileError::DocumentNotFound { .. })
    ));
}

#[tokio::test]
async fn test_non_numeric_status_stays_data() {
    let fixture = TestFixture::create().await.expect("fixture");
    let mut body = project_json("p1", "billing");
    body["error"] = json!({ "name": "Document not found", "status": "404" });
    fixture.respond("/project/reCompile", 200, body).await;

    let envelope = fixture.client.projects().re_compile("p1", TOKEN).await;
    let project = envelope.into_data().expect("data");
    assert_eq!(project.id, "p1");
}

#[tokio::test]
async fn test_envelope_wire_form() {
    let fixture = TestFixture::create().await.expect("fixture");
    fixture
        .respond("/project/reCompile", 200, project_json("p1", "billing"))
        .await;

    let envelope = fixture.client.projects().re_compile("p1", TOKEN).await;
    let wire = serde_json::to_value(&envelope).expect("serialize");
    assert!(wire["error"].is_null());
    assert_eq!(wire["data"]["_id"], "p1");

    let back: Envelope<Project, ReCompileError> =
        serde_json::from_value(wire).expect("deserialize");
    assert_eq!(back.into_data().map(|p| p.id), Some("p1".to_owned()));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    crate::common::init_tracing();
    // Nothing listens on the discard port of the loopback interface.
    let client = bridge_sdk::Client::builder()
        .url("http://127.0.0.1:9")
        .insecure()
        .build()
        .expect("client");

    let err = client
        .projects()
        .get_mine(TOKEN)
        .await
        .into_error()
        .expect("error");
    assert!(matches!(err, GetMineError::Transport { .. }));
    assert!(err.data().expect("details")["message"].is_string());
    assert_eq!(client.stats().requests_failed, 1);
}
