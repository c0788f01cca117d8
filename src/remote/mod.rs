//! Client side of the remote generation contract.
//!
//! The service receives `{"text": "<prompt>"}` and answers with one of the
//! shapes in [`ResponseShape`].

mod client;
mod error;
mod shape;

use serde::{Deserialize, Serialize};

pub use client::RemoteClient;
pub use error::RemoteError;
pub use shape::ResponseShape;

/// Request body sent to (and accepted by) a generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
}
