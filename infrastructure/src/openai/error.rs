//! Error types for the OpenAI-compatible adapter

use debate_application::GatewayError;
use thiserror::Error;

/// Result type alias for OpenAI adapter operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when talking to a chat-completions endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Response contained no choices")]
    EmptyChoices,
}

impl From<OpenAiError> for GatewayError {
    fn from(error: OpenAiError) -> Self {
        match error {
            OpenAiError::Transport(e) if e.is_timeout() => GatewayError::Timeout,
            OpenAiError::Transport(e) => GatewayError::ConnectionError(e.to_string()),
            OpenAiError::Api { status: 429, message } => GatewayError::RateLimited(message),
            OpenAiError::Api { status, message } => GatewayError::RequestFailed { status, message },
            e @ (OpenAiError::ParseError { .. } | OpenAiError::EmptyChoices) => {
                GatewayError::InvalidResponse(e.to_string())
            }
            OpenAiError::ClientBuild(message) => GatewayError::Other(message),
        }
    }
}
