//! Infrastructure layer for agent-debate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDebateConfig, FileEvaluationConfig,
    FileOutputConfig, FileOutputFormat, FileRetryConfig,
};
pub use openai::{
    error::{OpenAiError, Result},
    gateway::{OpenAiCompletionGateway, OpenAiGatewayConfig},
};
