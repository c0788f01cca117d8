mod common;

use std::time::Duration;

use common::{remote_config, wait_for_server};
use reqwest::Client;
use uisketch::backend::{BackendServer, GENERATE_PATH};
use uisketch::generator::generate;
use uisketch::pipeline::{GenerationPipeline, GenerationSource};

async fn start_backend() -> String {
    let mut server = BackendServer::new();
    let addr = server.try_bind("127.0.0.1:0").await.expect("Failed to bind");
    tokio::spawn(async move {
        let _ = server.run().await;
    });
    assert!(wait_for_server(addr, Duration::from_secs(2)).await);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_root_and_health() {
    let base = start_backend().await;
    let client = Client::new();

    let root: serde_json::Value = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(root["message"], "Backend is running");

    let health: serde_json::Value = client
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
}

#[tokio::test]
async fn test_generate_ui_returns_document_shape() {
    let base = start_backend().await;
    let resp = Client::new()
        .post(format!("{}{}", base, GENERATE_PATH))
        .json(&serde_json::json!({ "text": "todo app" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["components"][0]["type"], "form");
    assert_eq!(body["components"][1]["type"], "list");
}

#[tokio::test]
async fn test_missing_text_is_rejected() {
    let base = start_backend().await;
    let resp = Client::new()
        .post(format!("{}{}", base, GENERATE_PATH))
        .json(&serde_json::json!({ "prompt": "todo" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);
}

#[tokio::test]
async fn test_pipeline_round_trips_through_backend() {
    let base = start_backend().await;
    let endpoint = format!("{}{}", base, GENERATE_PATH);
    let pipeline = GenerationPipeline::new(&remote_config(&endpoint, 5)).unwrap();

    let prompt = "Landing page with navbar, hero, 3 pricing plans and a footer";
    let generation = pipeline.generate(prompt).await.unwrap();

    assert_eq!(generation.source, GenerationSource::Remote);
    assert_eq!(generation.document, generate(prompt));
}
