//! Application layer for agent-debate
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{Backoff, RetryPolicy};
pub use ports::{
    completion_gateway::{CompletionGateway, GatewayError},
    progress::{DebateProgressNotifier, EvaluationKind, NoProgress},
};
pub use use_cases::run_ask::{AskResult, RunAskInput, RunAskUseCase};
pub use use_cases::run_debate::{RunDebateInput, RunDebateUseCase};
pub use use_cases::run_evaluation::{ComparisonReport, RunEvaluationInput, RunEvaluationUseCase};
pub use use_cases::run_zero_shot::RunZeroShotUseCase;
pub use use_cases::shared::RunDebateError;
