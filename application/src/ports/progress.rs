//! Progress notification port
//!
//! Defines the interface for reporting progress during debates and evaluations.

use crate::ports::completion_gateway::GatewayError;
use debate_domain::{DebateSettings, EvaluationTrial, RunStatistics};
use std::time::Duration;

/// Which batch an evaluation event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationKind {
    Debate,
    ZeroShot,
}

impl EvaluationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationKind::Debate => "Multi-Agent Debate",
            EvaluationKind::ZeroShot => "Zero-Shot",
        }
    }
}

impl std::fmt::Display for EvaluationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback for progress updates
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain text, ...).
pub trait DebateProgressNotifier: Send + Sync {
    /// Called when a round starts (0-based)
    fn on_round_start(&self, round: usize, settings: &DebateSettings);

    /// Called after an agent appended its reply for the round
    fn on_agent_response(&self, round: usize, agent: usize, response: &str);

    /// Called when every agent has answered in a round
    fn on_round_complete(&self, round: usize);

    /// Called when a completion call failed and will be retried after `delay`
    fn on_retry(&self, _attempt: u32, _error: &GatewayError, _delay: Duration) {}

    // ==================== Evaluation Callbacks ====================

    /// Called before the first trial of a batch
    fn on_evaluation_start(&self, _kind: EvaluationKind, _trials: usize) {}

    /// Called as each trial finishes, in trial order
    fn on_trial_complete(&self, _kind: EvaluationKind, _trial: &EvaluationTrial) {}

    /// Called with the batch statistics
    fn on_evaluation_complete(&self, _kind: EvaluationKind, _statistics: &RunStatistics) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgressNotifier for NoProgress {
    fn on_round_start(&self, _round: usize, _settings: &DebateSettings) {}
    fn on_agent_response(&self, _round: usize, _agent: usize, _response: &str) {}
    fn on_round_complete(&self, _round: usize) {}
}

/// Adapter: forwards only retry notices from debates run inside an evaluation.
///
/// Trials may run concurrently, so per-round events from different trials
/// would interleave; the evaluation reports per-trial progress instead.
pub struct TrialScopedProgress<'a> {
    inner: &'a dyn DebateProgressNotifier,
}

impl<'a> TrialScopedProgress<'a> {
    pub fn new(inner: &'a dyn DebateProgressNotifier) -> Self {
        Self { inner }
    }
}

impl DebateProgressNotifier for TrialScopedProgress<'_> {
    fn on_round_start(&self, _round: usize, _settings: &DebateSettings) {}
    fn on_agent_response(&self, _round: usize, _agent: usize, _response: &str) {}
    fn on_round_complete(&self, _round: usize) {}

    fn on_retry(&self, attempt: u32, error: &GatewayError, delay: Duration) {
        self.inner.on_retry(attempt, error, delay);
    }
}
