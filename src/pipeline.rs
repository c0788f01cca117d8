//! Prompt to document, preferring the remote service when one is configured.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use thiserror::Error;

use crate::config::RemoteConfig;
use crate::generator::generate;
use crate::model::Document;
use crate::remote::{RemoteClient, RemoteError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Rejected before any generation attempt.
    #[error("Please enter a description")]
    EmptyInput,

    /// Another generation is still outstanding.
    #[error("A generation is already in progress")]
    Busy,
}

/// Where a document came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum GenerationSource {
    Remote,
    Local,
    /// The remote service failed and the local generator stood in.
    Fallback { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub prompt: String,
    pub document: Document,
    pub source: GenerationSource,
}

impl Generation {
    /// Status line shown to the user.
    pub fn status(&self) -> String {
        let count = components(self.document.len());
        match &self.source {
            GenerationSource::Remote => format!("Generated {} via remote service", count),
            GenerationSource::Local => format!("Generated {} locally", count),
            GenerationSource::Fallback { reason } => format!(
                "Remote service unavailable ({}); generated {} locally",
                reason, count
            ),
        }
    }
}

fn components(n: usize) -> String {
    if n == 1 {
        "1 component".to_string()
    } else {
        format!("{} components", n)
    }
}

/// At most one generation runs at a time; an overlapping call is a no-op.
pub struct GenerationPipeline {
    remote: Option<RemoteClient>,
    in_flight: AtomicBool,
}

impl GenerationPipeline {
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        if !config.enabled {
            return Ok(Self::local());
        }
        Ok(Self::with_remote(RemoteClient::new(config)?))
    }

    pub fn local() -> Self {
        Self {
            remote: None,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_remote(client: RemoteClient) -> Self {
        Self {
            remote: Some(client),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn remote_endpoint(&self) -> Option<&str> {
        self.remote.as_ref().map(RemoteClient::endpoint)
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Generate a document for `prompt`.
    ///
    /// Remote failures are never surfaced as errors: they are logged and the
    /// local generator answers instead.
    pub async fn generate(&self, prompt: &str) -> Result<Generation, GenerateError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenerateError::EmptyInput);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("Generation already in flight, ignoring request");
            return Err(GenerateError::Busy);
        }
        scopeguard::defer! {
            self.in_flight.store(false, Ordering::SeqCst);
        }

        let (document, source) = match &self.remote {
            Some(client) => match client.generate(prompt).await {
                Ok(document) => (document, GenerationSource::Remote),
                Err(e) => {
                    tracing::warn!(
                        endpoint = client.endpoint(),
                        reason = e.error_type(),
                        error = %e,
                        "Remote generation failed, falling back to local generator"
                    );
                    (
                        generate(prompt),
                        GenerationSource::Fallback {
                            reason: e.error_type().to_string(),
                        },
                    )
                }
            },
            None => (generate(prompt), GenerationSource::Local),
        };

        tracing::info!(
            components = document.len(),
            kinds = ?document.kinds(),
            "Generated document"
        );

        Ok(Generation {
            prompt: prompt.to_string(),
            document,
            source,
        })
    }
}
