//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid transcript: {0}")]
    InvalidTranscript(String),

    #[error("Invalid settings: {field} must be between {min} and {max} (got {value})")]
    InvalidSettings {
        field: &'static str,
        min: usize,
        max: usize,
        value: usize,
    },
}

impl DomainError {
    /// Check if this error was raised by settings validation
    pub fn is_invalid_settings(&self) -> bool {
        matches!(self, DomainError::InvalidSettings { .. })
    }
}
