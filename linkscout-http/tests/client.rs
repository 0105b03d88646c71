use linkscout_http::{HttpClient, HttpError};
use serde::Deserialize;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct Echo {
    id: String,
}

#[tokio::test]
async fn post_json_sends_bearer_and_decodes_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/things"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_json(serde_json::json!({ "name": "jane" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "t-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri(), "sk-test").unwrap();
    let got: Echo = client
        .post_json("things", &serde_json::json!({ "name": "jane" }))
        .await
        .unwrap();

    assert_eq!(got.id, "t-1");
}

#[tokio::test]
async fn api_errors_carry_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({ "message": "no such" })),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri(), "sk-test").unwrap();
    let err = client
        .get_json::<serde_json::Value>("missing")
        .await
        .unwrap_err();

    match err {
        HttpError::Api { status, message } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "no such");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_ignores_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/things/t-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri(), "sk-test").unwrap();
    client.delete("things/t-1").await.unwrap();
}
