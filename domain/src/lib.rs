//! Domain layer for agent-debate
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Debate
//!
//! Several agents answer the same question, then revise their answers over a
//! fixed number of rounds after reading each other's latest replies. The final
//! answers are reduced with an [`AnswerMode`] and combined by majority vote.
//!
//! ## Evaluation
//!
//! Randomized `a + b*c + d - e*f` problems are scored against their ground
//! truth to compare debate with a single zero-shot call.

pub mod core;
pub mod debate;
pub mod evaluation;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use core::{error::DomainError, question::Question};
pub use debate::{
    AgentAnswer, AnswerMode, AnswerValue, DebateOutcome, DebateSettings, Majority,
    PeerVisibility, VoteError, ZeroShotOutcome, majority_vote, parse_numeric_answer,
};
pub use evaluation::{
    ArithmeticProblem, EvaluationReport, EvaluationSettings, EvaluationTrial, RunStatistics,
    TrialScore,
};
pub use prompt::PromptTemplate;
pub use session::{
    context::AgentContext,
    entities::{Message, Role},
};
