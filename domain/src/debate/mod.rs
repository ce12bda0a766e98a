//! Debate domain
//!
//! Everything about one debate that does not involve calling a model:
//!
//! - [`settings`] - number of agents and rounds, peer visibility
//! - [`answer`] - reducing a response to a comparable [`AnswerValue`](answer::AnswerValue)
//! - [`vote`] - majority vote with first-seen tie-break
//! - [`entities`] - the outcome handed back to callers
//!
//! # Round structure
//!
//! ```text
//! round 0      agent 0 ─► reply      agent 1 ─► reply      ...
//! round r > 0  agent 0 ─► peers' latest replies ─► reply
//!              agent 1 ─► peers' latest replies ─► reply   (sees agent 0's round-r reply
//!              ...                                          under sequential visibility)
//! final        last message of each agent ─► extract ─► majority vote
//! ```

pub mod answer;
pub mod entities;
pub mod settings;
pub mod vote;

pub use answer::{AnswerMode, AnswerValue, parse_numeric_answer};
pub use entities::{AgentAnswer, DebateOutcome, ZeroShotOutcome};
pub use settings::{DebateSettings, PeerVisibility};
pub use vote::{Majority, VoteError, majority_vote};
