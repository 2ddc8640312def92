//! Completion client seam: trait + error type.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::CompletionRequest;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("could not decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("response contained no completion text")]
    EmptyResponse,
}

/// Anything that can turn a completion request into raw assistant text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ClientError>;
}
