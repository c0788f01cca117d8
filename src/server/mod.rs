//! HTTP surface for the interactive editor.

mod error;
mod page;
mod routes;
mod shutdown;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::editor::EditorIntent;
use crate::pipeline::{GenerateError, GenerationPipeline};

pub use error::{ApiError, ErrorResponse};
pub use page::build_index_html;
pub use routes::build_router;
pub use shutdown::ShutdownManager;
pub use state::{AppState, StateView};

/// Number of ports tried after the configured one.
pub const PORT_FALLBACK_RANGE: u16 = 100;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Could not find available port in range {start}-{end}")]
    NoAvailablePort { start: u16, end: u16 },

    #[error("run() called before try_bind()")]
    NotBound,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Bind the configured address, falling back to the next ports if busy.
///
/// The listener is returned bound so no other process can claim the port
/// before the server starts.
pub async fn bind_with_fallback(bind_addr: &str) -> Result<TcpListener, ServerError> {
    let addr: SocketAddr = bind_addr.parse().map_err(|e| ServerError::InvalidAddr {
        addr: bind_addr.to_string(),
        source: e,
    })?;

    let start_port = addr.port();
    let end_port = start_port.saturating_add(PORT_FALLBACK_RANGE);
    let host = addr.ip();

    for port in start_port..=end_port {
        match TcpListener::bind(SocketAddr::new(host, port)).await {
            Ok(listener) => return Ok(listener),
            Err(e) => {
                tracing::debug!("Port {} busy: {}", port, e);
                continue;
            }
        }
    }

    Err(ServerError::NoAvailablePort {
        start: start_port,
        end: end_port,
    })
}

pub struct EditorServer {
    pub addr: SocketAddr,
    /// Populated by try_bind(), consumed by run().
    listener: Option<TcpListener>,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
    initial_prompt: String,
}

impl EditorServer {
    pub fn new(config: &Config, pipeline: GenerationPipeline) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            listener: None,
            state: AppState::new(pipeline, config.server.default_mode),
            shutdown: Arc::new(ShutdownManager::new()),
            initial_prompt: config.server.initial_prompt.clone(),
        }
    }

    pub async fn try_bind(&mut self, bind_addr: &str) -> Result<SocketAddr, ServerError> {
        let listener = bind_with_fallback(bind_addr).await?;
        let actual_addr = listener.local_addr()?;
        self.addr = actual_addr;
        self.listener = Some(listener);
        tracing::info!("Editor bound to http://{}", actual_addr);
        Ok(actual_addr)
    }

    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Generate the initial prompt, then serve until shutdown.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.listener.ok_or(ServerError::NotBound)?;

        match self.state.generate(&self.initial_prompt).await {
            Ok(_) => {}
            Err(GenerateError::EmptyInput) => {
                self.state
                    .dispatch(EditorIntent::SetStatus("Describe a UI to get started".to_string()));
            }
            Err(e) => tracing::warn!("Initial generation skipped: {}", e),
        }

        tracing::info!("Starting editor server on {}", self.addr);

        let app = build_router(self.state.clone());
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                if let Err(e) = shutdown.wait_for_shutdown().await {
                    tracing::error!("Shutdown signal handler failed: {}", e);
                }
            })
            .await?;

        tracing::info!("Editor server stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
