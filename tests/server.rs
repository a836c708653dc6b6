use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use vent::llm::mock_chat::MockChat;
use vent::{Server, Synthesizer};

fn app(llm: Arc<MockChat>) -> Router {
    let synth = Arc::new(Synthesizer::new(llm));
    Arc::new(Server::new(synth, Duration::ZERO)).router()
}

async fn post(router: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Vec<u8>) {
    let resp = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn comments_without_post_is_bad_request() {
    let llm = Arc::new(MockChat::replying("[]"));
    let (status, body) = post(app(llm.clone()), "/api/generate-comments", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_of(&body), json!({"error": "Post content is required"}));
    assert_eq!(llm.calls(), 0);
}

#[tokio::test]
async fn comments_fall_back_when_unconfigured() {
    let (status, body) = post(
        app(Arc::new(MockChat::unconfigured())),
        "/api/generate-comments",
        json!({"post": "Return-to-office again"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let value = json_of(&body);
    let comments = value["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 10);
    for c in comments {
        for key in ["id", "author", "content", "timestamp", "profilePic"] {
            assert!(c[key].as_str().is_some_and(|s| !s.is_empty()), "missing {key}");
        }
    }
}

#[tokio::test]
async fn malformed_body_is_internal_error() {
    let (status, body) = post(
        app(Arc::new(MockChat::unconfigured())),
        "/api/generate-comments",
        "{not json",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_of(&body), json!({"error": "Failed to generate comments"}));
}

#[tokio::test]
async fn email_reply_round_trip() {
    let (status, body) = post(
        app(Arc::new(MockChat::unconfigured())),
        "/api/generate-email-response",
        json!({"to": "jane.doe@co.com", "subject": "Scope creep", "body": "Again."}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let value = json_of(&body);
    let response = &value["response"];
    assert_eq!(response["from"], "Jane Doe");
    assert_eq!(response["subject"], "Re: Scope creep");
    assert!(response["id"].as_str().unwrap().starts_with("response-"));
    assert!(response["timestamp"].is_string());
    assert!(response["profilePic"].is_string());
}

#[tokio::test]
async fn incomplete_email_is_bad_request() {
    let (status, body) = post(
        app(Arc::new(MockChat::unconfigured())),
        "/api/generate-email-response",
        json!({"to": "jane.doe@co.com", "subject": "Scope creep"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_of(&body), json!({"error": "Email data is incomplete"}));
}

#[tokio::test]
async fn email_with_wrong_types_is_internal_error() {
    let (status, body) = post(
        app(Arc::new(MockChat::unconfigured())),
        "/api/generate-email-response",
        json!({"to": 5, "subject": "s", "body": "b"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_of(&body), json!({"error": "Failed to generate response"}));
}

#[tokio::test]
async fn stream_emits_ten_comments_then_done() {
    let (status, body) = post(
        app(Arc::new(MockChat::unconfigured())),
        "/api/generate-comments/stream",
        json!({"post": "x"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert_eq!(text.matches("event: comment").count(), 10);
    assert!(text.trim_end().ends_with("data: [DONE]"));
    let ids: Vec<String> = text
        .lines()
        .filter_map(|l| l.strip_prefix("data: "))
        .filter(|d| d.starts_with('{'))
        .map(|d| json_of(d.as_bytes())["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids.len(), 10);
    let expected: Vec<String> = (0..10).map(|i| format!("-{i}")).collect();
    for (id, suffix) in ids.iter().zip(&expected) {
        assert!(id.ends_with(suffix), "{id} out of order");
    }
}

#[tokio::test]
async fn stream_without_post_is_bad_request() {
    let (status, _) = post(
        app(Arc::new(MockChat::unconfigured())),
        "/api/generate-comments/stream",
        "{}",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
