//! Run Zero-Shot use case
//!
//! The single-call baseline: the question goes out once, no rounds, no vote.

use crate::config::RetryPolicy;
use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use crate::use_cases::shared::{RunDebateError, complete_with_retry};
use debate_domain::{AnswerMode, Message, Question, ZeroShotOutcome};
use std::sync::Arc;
use tracing::debug;

/// Use case for asking a question once without debate
pub struct RunZeroShotUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    retry: RetryPolicy,
}

impl<G: CompletionGateway + 'static> RunZeroShotUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub async fn execute(
        &self,
        question: &Question,
        mode: AnswerMode,
    ) -> Result<ZeroShotOutcome, RunDebateError> {
        self.execute_with_progress(question, mode, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        question: &Question,
        mode: AnswerMode,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<ZeroShotOutcome, RunDebateError> {
        let messages = [Message::user(question.content())];
        let reply =
            complete_with_retry(self.gateway.as_ref(), &messages, &self.retry, progress).await?;
        debug!("Zero-shot responded ({} chars)", reply.content().len());
        Ok(ZeroShotOutcome::new(mode, reply.content()))
    }
}
