//! Stand-alone generation service speaking the remote contract.
//!
//! Answers `POST /generate-ui/` with `{"components": [...]}` produced by the
//! rule-based generator, so the editor's remote path can run end to end.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::generator::generate;
use crate::model::Document;
use crate::remote::GenerateRequest;
use crate::server::{bind_with_fallback, ServerError, ShutdownManager};

/// Path the service answers generation requests on.
pub const GENERATE_PATH: &str = "/generate-ui/";

pub fn build_backend_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(GENERATE_PATH, post(generate_ui))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Backend is running" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "uisketch-backend" }))
}

async fn generate_ui(Json(req): Json<GenerateRequest>) -> Json<Document> {
    let document = generate(&req.text);
    tracing::info!(
        components = document.len(),
        kinds = ?document.kinds(),
        "Served generation request"
    );
    Json(document)
}

pub struct BackendServer {
    pub addr: SocketAddr,
    listener: Option<TcpListener>,
    shutdown: Arc<ShutdownManager>,
}

impl BackendServer {
    pub fn new() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            listener: None,
            shutdown: Arc::new(ShutdownManager::new()),
        }
    }

    pub async fn try_bind(&mut self, bind_addr: &str) -> Result<SocketAddr, ServerError> {
        let listener = bind_with_fallback(bind_addr).await?;
        let actual_addr = listener.local_addr()?;
        self.addr = actual_addr;
        self.listener = Some(listener);
        tracing::info!(
            "Generation backend bound to http://{}{}",
            actual_addr,
            GENERATE_PATH
        );
        Ok(actual_addr)
    }

    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.listener.ok_or(ServerError::NotBound)?;
        let shutdown = self.shutdown.clone();

        axum::serve(listener, build_backend_router())
            .with_graceful_shutdown(async move {
                if let Err(e) = shutdown.wait_for_shutdown().await {
                    tracing::error!("Shutdown signal handler failed: {}", e);
                }
            })
            .await?;

        tracing::info!("Generation backend stopped");
        Ok(())
    }
}

impl Default for BackendServer {
    fn default() -> Self {
        Self::new()
    }
}
