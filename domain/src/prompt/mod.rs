//! Prompt domain
//!
//! Fixed texts and builders for the messages sent between debate rounds.

mod template;

pub use template::{PromptTemplate, SELF_VERIFICATION_PROMPT};
