//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod run_ask;
pub mod run_debate;
pub mod run_evaluation;
pub mod run_zero_shot;
pub mod shared;
