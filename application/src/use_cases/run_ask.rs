//! Run Ask use case.
//!
//! The open-ended question flow: a freeform debate followed by the zero-shot
//! answer to the same question, for side-by-side display.

use crate::config::RetryPolicy;
use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use crate::use_cases::run_debate::{RunDebateInput, RunDebateUseCase};
use crate::use_cases::run_zero_shot::RunZeroShotUseCase;
use crate::use_cases::shared::RunDebateError;
use debate_domain::{AnswerMode, DebateOutcome, DebateSettings, Question, ZeroShotOutcome};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Input for the [`RunAskUseCase`].
#[derive(Debug, Clone)]
pub struct RunAskInput {
    pub question: Question,
    pub settings: DebateSettings,
    /// Also ask the question once without debate
    pub include_zero_shot: bool,
}

impl RunAskInput {
    pub fn new(question: Question, settings: DebateSettings) -> Self {
        Self {
            question,
            settings,
            include_zero_shot: true,
        }
    }

    pub fn without_zero_shot(mut self) -> Self {
        self.include_zero_shot = false;
        self
    }
}

/// Result of the open-ended flow
#[derive(Debug, Clone, Serialize)]
pub struct AskResult {
    pub question: String,
    pub model: String,
    pub debate: DebateOutcome,
    pub zero_shot: Option<ZeroShotOutcome>,
}

/// Use case for the open-ended question flow.
pub struct RunAskUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    retry: RetryPolicy,
}

impl<G: CompletionGateway + 'static> RunAskUseCase<G> {
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

    pub async fn execute(&self, input: RunAskInput) -> Result<AskResult, RunDebateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: RunAskInput,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<AskResult, RunDebateError> {
        info!("Running multi-agent debate");
        let debate = RunDebateUseCase::new(Arc::clone(&self.gateway))
            .with_retry_policy(self.retry)
            .execute_with_progress(
                RunDebateInput::new(input.question.clone(), input.settings)
                    .with_mode(AnswerMode::Freeform),
                progress,
            )
            .await?;

        let zero_shot = if input.include_zero_shot {
            info!("Running zero-shot");
            let outcome = RunZeroShotUseCase::new(Arc::clone(&self.gateway))
                .with_retry_policy(self.retry)
                .execute_with_progress(&input.question, AnswerMode::Freeform, progress)
                .await?;
            Some(outcome)
        } else {
            None
        };

        Ok(AskResult {
            question: input.question.into_content(),
            model: self.gateway.model_name().to_string(),
            debate,
            zero_shot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::shared::test_support::ScriptedGateway;
    use debate_domain::AnswerValue;
    use std::time::Duration;

    fn use_case(gateway: &Arc<ScriptedGateway>) -> RunAskUseCase<ScriptedGateway> {
        RunAskUseCase::new(Arc::clone(gateway))
            .with_retry_policy(RetryPolicy::unbounded(Duration::ZERO))
    }

    #[tokio::test]
    async fn test_debate_then_zero_shot() {
        let gateway = Arc::new(ScriptedGateway::constant("  Paris  "));
        let input = RunAskInput::new(
            Question::try_new("Capital of France?").unwrap(),
            DebateSettings::new(2, 2).unwrap(),
        );

        let result = use_case(&gateway).execute(input).await.unwrap();

        // 2 agents x 2 rounds + 1 zero-shot call
        assert_eq!(gateway.call_count(), 5);
        assert_eq!(result.question, "Capital of France?");
        assert_eq!(result.model, "scripted");
        assert_eq!(
            result.debate.answer(),
            Some(&AnswerValue::Text("Paris".to_string()))
        );
        let zero_shot = result.zero_shot.unwrap();
        assert_eq!(zero_shot.answer, Some(AnswerValue::Text("Paris".to_string())));
    }

    #[tokio::test]
    async fn test_without_zero_shot() {
        let gateway = Arc::new(ScriptedGateway::constant("yes"));
        let input = RunAskInput::new(
            Question::try_new("Is water wet?").unwrap(),
            DebateSettings::new(1, 1).unwrap(),
        )
        .without_zero_shot();

        let result = use_case(&gateway).execute(input).await.unwrap();

        assert_eq!(gateway.call_count(), 1);
        assert!(result.zero_shot.is_none());
    }
}
