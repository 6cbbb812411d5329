//! Project operation tests against a fake bridge backend.

use bridge_sdk::project::{GetMineError, Provider, ReCompileError, Visibility};
use bridge_sdk::{ErrorKind, RemoteError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TOKEN, TestFixture, page_json, project_json};

#[tokio::test]
async fn test_get_mine_lists_projects() {
    let fixture = TestFixture::create().await.expect("fixture");
    fixture
        .respond("/project/getMine", 200, page_json(&["p1", "p2", "p3"], 7, 0, 3))
        .await;

    let page = fixture
        .client
        .projects()
        .get_mine(TOKEN)
        .limit(3)
        .await
        .into_data()
        .expect("page");

    assert_eq!(page.len(), 3);
    assert_eq!(page.total, 7);
    assert!(page.has_next());
    assert_eq!(page.next_skip(), Some(3));

    let first = &page.data[0];
    assert_eq!(first.id, "p1");
    assert_eq!(first.provider, Provider::Github);
    let repo = first.github_repo.as_ref().expect("linked repo");
    assert_eq!(repo.visibility, Visibility::Public);
}

#[tokio::test]
async fn test_get_mine_sends_query_and_token() {
    let fixture = TestFixture::create().await.expect("fixture");

    Mock::given(method("POST"))
        .and(path("/project/getMine"))
        .and(query_param("limit", "10"))
        .and(query_param("skip", "20"))
        .and(header("token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&[], 20, 20, 10)))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let envelope = fixture.client.projects().get_mine(TOKEN).limit(10).skip(20).await;
    assert!(envelope.is_data());

    let requests = fixture.received().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("x-request-id").is_some());
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_get_mine_walks_all_pages() {
    let fixture = TestFixture::create().await.expect("fixture");

    for (skip, ids) in [(0u64, vec!["a", "b"]), (2, vec!["c", "d"]), (4, vec!["e"])] {
        Mock::given(method("POST"))
            .and(path("/project/getMine"))
            .and(query_param("skip", skip.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&ids, 5, skip, 2)))
            .mount(&fixture.server)
            .await;
    }

    let projects = fixture.client.projects();
    let mut seen = Vec::new();
    let mut skip = Some(0u64);
    while let Some(next) = skip {
        let page = projects
            .get_mine(TOKEN)
            .limit(2)
            .skip(u32::try_from(next).expect("small skip"))
            .await
            .into_data()
            .expect("page");
        skip = page.next_skip();
        seen.extend(page.into_iter().map(|project| project.id));
    }

    assert_eq!(seen, ["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn test_get_mine_expired_token() {
    let fixture = TestFixture::create().await.expect("fixture");
    fixture
        .respond(
            "/project/getMine",
            401,
            json!({ "error": { "name": "Expired token", "status": 401 } }),
        )
        .await;

    let envelope = fixture.client.projects().get_mine(TOKEN).await;
    let err = envelope.into_error().expect("error");
    assert!(matches!(err, GetMineError::ExpiredToken { .. }));
    assert_eq!(err.data(), None);
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_get_mine_headers_validation() {
    let fixture = TestFixture::create().await.expect("fixture");
    fixture
        .respond(
            "/project/getMine",
            422,
            json!({
                "name": "Headers schema validation error",
                "status": 422,
                "data": [{ "path": ["token"], "message": "Required" }]
            }),
        )
        .await;

    let err = fixture
        .client
        .projects()
        .get_mine("")
        .await
        .into_error()
        .expect("error");
    assert!(matches!(err, GetMineError::HeadersValidation { .. }));
    assert_eq!(err.data().expect("payload")[0]["message"], "Required");
}

#[tokio::test]
async fn test_re_compile_returns_updated_project() {
    let fixture = TestFixture::create().await.expect("fixture");

    let mut updated = project_json("6650f0c2", "billing");
    updated["pendingCompilation"] = json!(true);

    Mock::given(method("POST"))
        .and(path("/project/reCompile"))
        .and(query_param("projectId", "6650f0c2"))
        .and(header("token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let project = fixture
        .client
        .projects()
        .re_compile("6650f0c2", TOKEN)
        .await
        .into_data()
        .expect("project");
    assert_eq!(project.name, "billing");
    assert!(project.pending_compilation);
}

#[tokio::test]
async fn test_re_compile_declared_errors() {
    let cases = [
        ("Document not found", 404),
        ("User not connected with github", 401),
        ("Undefined in result of github.getRepoZip", 500),
        ("Project not connected to github or gitlab", 401),
        ("Wrong permission", 401),
    ];

    for (name, status) in cases {
        let fixture = TestFixture::create().await.expect("fixture");
        fixture
            .respond(
                "/project/reCompile",
                status,
                json!({ "error": { "name": name, "status": status } }),
            )
            .await;

        let err = fixture
            .client
            .projects()
            .re_compile("p1", TOKEN)
            .await
            .into_error()
            .expect("error");
        assert!(err.is_declared(), "{} should be declared", name);
        assert_eq!(err.name(), name);
        assert_eq!(err.status(), status);
    }
}

#[tokio::test]
async fn test_re_compile_error_converts_for_question_mark() {
    let fixture = TestFixture::create().await.expect("fixture");
    fixture
        .respond(
            "/project/reCompile",
            404,
            json!({ "error": { "name": "Document not found", "status": 404 } }),
        )
        .await;

    async fn recompile(fixture: &TestFixture) -> bridge_sdk::Result<String> {
        let project = fixture
            .client
            .projects()
            .re_compile("missing", TOKEN)
            .await
            .into_result()?;
        Ok(project.id)
    }

    let err = recompile(&fixture).await.expect_err("not found");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_unlisted_error_is_kept_verbatim() {
    let fixture = TestFixture::create().await.expect("fixture");
    let raw = json!({ "name": "Too many requests", "status": 429, "retryAfter": 30 });
    fixture
        .respond("/project/reCompile", 429, json!({ "error": raw.clone() }))
        .await;

    let err = fixture
        .client
        .projects()
        .re_compile("p1", TOKEN)
        .await
        .into_error()
        .expect("error");
    assert!(!err.is_declared());
    assert_eq!(err.status(), 429);
    assert!(matches!(&err, ReCompileError::Undeclared(undeclared) if undeclared.raw() == &raw));
}
