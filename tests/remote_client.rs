mod common;

use common::mock_remote::{MockRemote, MockResponse};
use common::{closed_endpoint, remote_config};
use uisketch::model::NodeKind;
use uisketch::remote::{RemoteClient, RemoteError};

#[tokio::test]
async fn test_sends_prompt_as_text_field() {
    let mock = MockRemote::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"components": [{"type": "button", "props": {"text": "Go"}}]}"#,
    ))
    .await;

    let client = RemoteClient::new(&remote_config(&mock.endpoint(), 5)).unwrap();
    let doc = client.generate("A button").await.unwrap();

    assert_eq!(doc.len(), 1);
    assert_eq!(doc.get(0).unwrap().kind, NodeKind::Button);

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/generate-ui/");
    assert_eq!(requests[0].json(), serde_json::json!({ "text": "A button" }));
}

#[tokio::test]
async fn test_accepts_bare_and_nested_shapes() {
    let mock = MockRemote::start().await;
    mock.enqueue_response(MockResponse::json(r#"[{"type": "hero"}]"#)).await;
    mock.enqueue_response(MockResponse::json(
        r#"{"result": {"components": [{"type": "footer"}]}}"#,
    ))
    .await;

    let client = RemoteClient::new(&remote_config(&mock.endpoint(), 5)).unwrap();
    assert_eq!(client.generate("x").await.unwrap().kinds(), vec!["hero"]);
    assert_eq!(client.generate("y").await.unwrap().kinds(), vec!["footer"]);
}

#[tokio::test]
async fn test_properties_alias_and_string_lists() {
    let mock = MockRemote::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"components": [{"type": "form", "properties": {"fields": "Email, Password"}}]}"#,
    ))
    .await;

    let client = RemoteClient::new(&remote_config(&mock.endpoint(), 5)).unwrap();
    let doc = client.generate("login").await.unwrap();
    let node = doc.get(0).unwrap();
    assert_eq!(node.list_or("fields", &[]), vec!["Email", "Password"]);
}

#[tokio::test]
async fn test_empty_components_is_success() {
    let mock = MockRemote::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"components": []}"#)).await;

    let client = RemoteClient::new(&remote_config(&mock.endpoint(), 5)).unwrap();
    let doc = client.generate("nothing").await.unwrap();
    assert!(doc.is_empty());
}

#[tokio::test]
async fn test_non_success_status_fails_without_retry() {
    let mock = MockRemote::start().await;
    mock.enqueue_response(MockResponse::error(503, "overloaded")).await;

    let client = RemoteClient::new(&remote_config(&mock.endpoint(), 5)).unwrap();
    let err = client.generate("x").await.unwrap_err();

    match err {
        RemoteError::Status { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("overloaded"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert_eq!(mock.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn test_non_json_body_is_invalid() {
    let mock = MockRemote::start().await;
    mock.enqueue_response(MockResponse::text(200, "<html>oops</html>")).await;

    let client = RemoteClient::new(&remote_config(&mock.endpoint(), 5)).unwrap();
    let err = client.generate("x").await.unwrap_err();
    assert!(matches!(err, RemoteError::InvalidBody(_)));
}

#[tokio::test]
async fn test_unrecognized_shape_is_error() {
    let mock = MockRemote::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"message": "hello"}"#)).await;

    let client = RemoteClient::new(&remote_config(&mock.endpoint(), 5)).unwrap();
    let err = client.generate("x").await.unwrap_err();
    assert_eq!(err.error_type(), "unrecognized_shape");
}

#[tokio::test]
async fn test_slow_remote_times_out() {
    let mock = MockRemote::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"components": []}"#).with_delay(2_500))
        .await;

    let client = RemoteClient::new(&remote_config(&mock.endpoint(), 1)).unwrap();
    let err = client.generate("x").await.unwrap_err();
    assert!(matches!(err, RemoteError::Timeout { duration: 1 }));
}

#[tokio::test]
async fn test_refused_connection() {
    let endpoint = closed_endpoint();
    let client = RemoteClient::new(&remote_config(&endpoint, 5)).unwrap();
    let err = client.generate("x").await.unwrap_err();
    assert!(matches!(err, RemoteError::Connection { .. }));
}
