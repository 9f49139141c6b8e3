//! Outbound contract of `ApiClient::company_sanction` against a local mock backend.

use std::time::Duration;

use api::{ApiClient, ApiConfig, ApiError, TokenSource};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, token: TokenSource, timeout: Duration) -> ApiClient {
    let config = ApiConfig::default()
        .with_base_url(&format!("{}/api", server.uri()))
        .expect("mock server uri is a valid base url")
        .with_timeout(Some(timeout))
        .with_token(token);
    ApiClient::new(config)
}

#[tokio::test]
async fn sends_project_token_to_the_company_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sanction/company/42/"))
        .and(header("Project-Token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "name": "Acme",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, TokenSource::Static("tok".into()), Duration::from_secs(5));
    let object = api.company_sanction("42").await.unwrap();

    assert_eq!(object["name"], "Acme");
    assert_eq!(object["id"], "42");
}

#[tokio::test]
async fn blank_token_sends_no_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sanction/company/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = client(&server, TokenSource::Static("   ".into()), Duration::from_secs(5));
    let object = api.company_sanction("7").await.unwrap();
    assert!(object.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("project-token").is_none());
}

#[tokio::test]
async fn non_success_status_is_reported_with_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = client(&server, TokenSource::None, Duration::from_secs(5));
    let err = api.company_sanction("404").await.unwrap_err();

    match err {
        ApiError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/api/sanction/company/404/"), "{url}");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_object_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "an", "object"])))
        .mount(&server)
        .await;

    let api = client(&server, TokenSource::None, Duration::from_secs(5));
    let err = api.company_sanction("1").await.unwrap_err();
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": "1" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let limit = Duration::from_millis(50);
    let api = client(&server, TokenSource::None, limit);
    let err = api.company_sanction("1").await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout(d) if d == limit), "{err:?}");
}
