use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use uisketch::pipeline::GenerationPipeline;
use uisketch::render::OutputMode;
use uisketch::server::{build_router, AppState};

fn app(mode: OutputMode) -> (Router, AppState) {
    let state = AppState::new(GenerationPipeline::local(), mode);
    (build_router(state.clone()), state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_index_serves_page() {
    let (app, _) = app(OutputMode::Preview);
    let (status, bytes) = send_raw(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(bytes).unwrap();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("id=\"prompt\""));
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app(OutputMode::Preview);
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "uisketch");
    assert_eq!(body["remote"], Value::Null);
}

#[tokio::test]
async fn test_generate_login_form() {
    let (app, _) = app(OutputMode::Html);
    let (status, body) = send(
        &app,
        "POST",
        "/api/generate",
        Some(json!({ "prompt": "Login form with Email and Password" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"]["source"], "local");
    assert_eq!(body["document"]["components"][0]["type"], "form");
    assert_eq!(
        body["document"]["components"][0]["props"]["fields"],
        json!(["Email", "Password"])
    );
    let output = body["output"].as_str().unwrap();
    assert_eq!(output.matches("<form").count(), 1);
    assert_eq!(output.matches("<input").count(), 2);
    assert!(output.contains("<button"));
}

#[tokio::test]
async fn test_empty_prompt_is_rejected_with_error_body() {
    let (app, state) = app(OutputMode::Preview);
    state.generate("Button").await.unwrap();
    let before = state.snapshot();

    let (status, body) = send(&app, "POST", "/api/generate", Some(json!({ "prompt": "   " }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "empty_input");
    assert_eq!(body["error"]["message"], "Please enter a description");
    assert!(!body["error"]["request_id"].as_str().unwrap().is_empty());
    assert_eq!(state.snapshot(), before);
}

#[tokio::test]
async fn test_mode_switch_changes_output() {
    let (app, state) = app(OutputMode::Preview);
    state.generate("Button").await.unwrap();

    let (_, body) = send(&app, "PUT", "/api/mode", Some(json!({ "mode": "jsx" }))).await;
    assert_eq!(body["mode"], "jsx");
    assert!(body["output"].as_str().unwrap().contains("export default GeneratedUI;"));

    let (_, rendered) = send(&app, "GET", "/api/render?mode=html", None).await;
    assert_eq!(rendered["mode"], "html");
    assert!(rendered["output"].as_str().unwrap().starts_with("<button"));
    assert_eq!(state.snapshot().mode, OutputMode::Jsx);
}

#[tokio::test]
async fn test_preview_output_is_editable() {
    let (app, state) = app(OutputMode::Preview);
    state.generate("hero").await.unwrap();

    let (_, body) = send(&app, "GET", "/api/state", None).await;
    let output = body["output"].as_str().unwrap();
    assert!(output.contains("data-node-index=\"0\""));
    assert!(output.contains("contenteditable=\"true\""));
}

#[tokio::test]
async fn test_edit_property_reconciles_list() {
    let (app, state) = app(OutputMode::Html);
    state.generate("Login form").await.unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/nodes/0/props/fields",
        Some(json!({ "value": "Name, Email, Phone" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["document"]["components"][0]["props"]["fields"],
        json!(["Name", "Email", "Phone"])
    );
    assert_eq!(body["output"].as_str().unwrap().matches("<input").count(), 3);

    let (_, body) = send(
        &app,
        "PUT",
        "/api/nodes/0/props/fields",
        Some(json!({ "value": ["Email"] })),
    )
    .await;
    assert_eq!(
        body["document"]["components"][0]["props"]["fields"],
        json!(["Email"])
    );
}

#[tokio::test]
async fn test_edit_property_accepts_json_numbers_and_booleans() {
    let (app, state) = app(OutputMode::Html);
    state.generate("3 cards").await.unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/nodes/0/props/items",
        Some(json!({ "value": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["document"]["components"][0]["props"]["items"], json!(5));
    assert_eq!(
        body["output"].as_str().unwrap().matches("class=\"card\"").count(),
        5
    );

    let (status, body) = send(
        &app,
        "PUT",
        "/api/nodes/0/props/featured",
        Some(json!({ "value": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["document"]["components"][0]["props"]["featured"],
        json!("true")
    );
}

#[tokio::test]
async fn test_get_node_selects_it() {
    let (app, state) = app(OutputMode::Preview);
    state.generate("hero and footer").await.unwrap();

    let (status, body) = send(&app, "GET", "/api/nodes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["node"]["type"], "footer");
    assert_eq!(state.snapshot().selected, Some(1));
}

#[tokio::test]
async fn test_add_property() {
    let (app, state) = app(OutputMode::Preview);
    state.generate("Button").await.unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/api/nodes/0/props",
        Some(json!({ "name": "tooltip" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["document"]["components"][0]["props"]["tooltip"], "");

    let (status, body) = send(&app, "POST", "/api/nodes/0/props", Some(json!({ "name": " " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request");
}

#[tokio::test]
async fn test_unknown_node_is_404() {
    let (app, _) = app(OutputMode::Preview);
    let (status, body) = send(&app, "GET", "/api/nodes/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "node_not_found");

    let (status, _) = send(
        &app,
        "PUT",
        "/api/nodes/7/props/text",
        Some(json!({ "value": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_confirmed_delete_removes_node() {
    let (app, state) = app(OutputMode::Html);
    state.generate("hero and footer").await.unwrap();

    let (status, body) = send(&app, "DELETE", "/api/nodes/0?confirmed=true", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["document"]["components"].as_array().unwrap().len(), 1);
    assert_eq!(body["document"]["components"][0]["type"], "footer");
}

#[tokio::test]
async fn test_unconfirmed_delete_waits_for_answer() {
    let (app, state) = app(OutputMode::Html);
    state.generate("hero and footer").await.unwrap();

    let (_, body) = send(&app, "DELETE", "/api/nodes/1", None).await;
    assert_eq!(body["pending_removal"], 1);
    assert_eq!(body["document"]["components"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, "POST", "/api/removal", Some(json!({ "confirm": false }))).await;
    assert_eq!(body["pending_removal"], Value::Null);
    assert_eq!(body["document"]["components"].as_array().unwrap().len(), 2);

    send(&app, "DELETE", "/api/nodes/1", None).await;
    let (_, body) = send(&app, "POST", "/api/removal", Some(json!({ "confirm": true }))).await;
    assert_eq!(body["document"]["components"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_clear() {
    let (app, state) = app(OutputMode::Html);
    state.generate("Button").await.unwrap();

    let (_, body) = send(&app, "POST", "/api/clear", None).await;
    assert!(body["document"]["components"].as_array().unwrap().is_empty());
    assert_eq!(body["output"], "");
    assert_eq!(body["status"], "Cleared");
}

#[tokio::test]
async fn test_export_is_downloadable_document() {
    let (app, state) = app(OutputMode::Preview);
    state.generate("3 cards").await.unwrap();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/export").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-disposition").unwrap(),
        "attachment; filename=\"generated-ui.html\""
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<style>"));
    assert_eq!(html.matches("class=\"card\"").count(), 3);
}
