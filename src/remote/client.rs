use std::time::Duration;

use reqwest::Client;
use tokio::time::timeout;

use crate::config::RemoteConfig;
use crate::model::Document;
use crate::remote::error::RemoteError;
use crate::remote::shape::ResponseShape;
use crate::remote::GenerateRequest;

/// Longest status-error body carried into the error message.
const MAX_ERROR_BODY: usize = 200;

/// Client for an external generation service.
pub struct RemoteClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl RemoteClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(RemoteError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the service for a document describing `prompt`.
    ///
    /// A well-formed but empty component list is a successful, empty result.
    pub async fn generate(&self, prompt: &str) -> Result<Document, RemoteError> {
        match timeout(self.timeout, self.do_generate(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(RemoteError::Timeout {
                duration: self.timeout.as_secs(),
            }),
        }
    }

    async fn do_generate(&self, prompt: &str) -> Result<Document, RemoteError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest {
                text: prompt.to_string(),
            })
            .send()
            .await
            .map_err(|e| RemoteError::Connection {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| RemoteError::Connection {
            endpoint: self.endpoint.clone(),
            source: e,
        })?;

        if !status.is_success() {
            let message: String = String::from_utf8_lossy(&body)
                .chars()
                .take(MAX_ERROR_BODY)
                .collect();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let value: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| RemoteError::InvalidBody(e.to_string()))?;

        let shape = ResponseShape::classify(value)?;
        tracing::debug!(shape = shape.name(), "Remote response classified");
        Ok(shape.into_document())
    }
}
