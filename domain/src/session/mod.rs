//! Agent transcript domain.
//!
//! - [`entities::Message`]: a single role-tagged message
//! - [`context::AgentContext`]: the append-only transcript of one agent

pub mod context;
pub mod entities;
