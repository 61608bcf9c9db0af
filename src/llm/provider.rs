//! LLM provider trait and error types
//!
//! Defines the common interface for generative-text backends so the session
//! controller and exporters stay independent of any one service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error types for generation operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LlmError {
    /// Provider not reachable (network/transport failure)
    ProviderUnavailable(String),
    /// API key missing or rejected
    AuthenticationFailed(String),
    /// Request reached the service but failed (non-success status)
    RequestFailed(String),
    /// The service answered but produced no usable completion
    InferenceFailed(String),
    /// Generic error
    Other(String),
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::ProviderUnavailable(msg) => write!(f, "Provider unavailable: {}", msg),
            LlmError::AuthenticationFailed(msg) => write!(f, "Authentication failed: {}", msg),
            LlmError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            LlmError::InferenceFailed(msg) => write!(f, "Generation failed: {}", msg),
            LlmError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LlmError {}

/// A generative-text backend. One prompt in, one completion out; a single
/// attempt with no retry or backoff, so failures surface immediately.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// The fixed model identifier requests are sent with.
    fn model_id(&self) -> &str;

    /// Generate a completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
