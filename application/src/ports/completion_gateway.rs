//! Completion gateway port
//!
//! Defines the interface for calling a hosted chat-completion model.

use async_trait::async_trait;
use debate_domain::Message;
use thiserror::Error;

/// Errors that can occur during a completion call.
///
/// Every variant is treated as transient by the use cases and triggers the
/// retry policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for chat completions
///
/// Given the full transcript so far, returns the model's next assistant
/// message. Exactly one choice is requested per call. Implementations
/// (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Name of the model behind this gateway (for display)
    fn model_name(&self) -> &str;

    /// Request the next assistant message for `messages`
    async fn complete(&self, messages: &[Message]) -> Result<Message, GatewayError>;
}
