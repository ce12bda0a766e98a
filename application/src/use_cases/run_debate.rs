//! Run Debate use case
//!
//! Drives N agents through R rounds and votes on their final answers.

use crate::config::RetryPolicy;
use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use crate::use_cases::shared::{RunDebateError, complete_with_retry};
use debate_domain::{
    AgentContext, AnswerMode, DebateOutcome, DebateSettings, PeerVisibility, PromptTemplate,
    Question,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the RunDebate use case
#[derive(Debug, Clone)]
pub struct RunDebateInput {
    /// Seeds every agent's transcript
    pub question: Question,
    /// Passed to the round-message builder; defaults to the question text
    pub round_question: String,
    pub settings: DebateSettings,
    /// How final responses are turned into votes
    pub mode: AnswerMode,
}

impl RunDebateInput {
    pub fn new(question: Question, settings: DebateSettings) -> Self {
        Self {
            round_question: question.content().to_string(),
            question,
            settings,
            mode: AnswerMode::Freeform,
        }
    }

    pub fn with_mode(mut self, mode: AnswerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_round_question(mut self, round_question: impl Into<String>) -> Self {
        self.round_question = round_question.into();
        self
    }
}

/// Use case for running a multi-agent debate
///
/// Rounds run strictly in order and, within a round, agents answer one at a
/// time in index order. With [`PeerVisibility::Sequential`] an agent therefore
/// reads the replies that lower-indexed agents already gave in the same round;
/// [`PeerVisibility::RoundSnapshot`] freezes peers at the start of the round.
pub struct RunDebateUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    retry: RetryPolicy,
}

impl<G: CompletionGateway + 'static> RunDebateUseCase<G> {
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

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunDebateInput) -> Result<DebateOutcome, RunDebateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunDebateInput,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<DebateOutcome, RunDebateError> {
        info!(
            agents = input.settings.agents(),
            rounds = input.settings.rounds(),
            visibility = %input.settings.peer_visibility(),
            mode = %input.mode,
            "Starting debate"
        );

        let transcripts = self
            .run_rounds(
                &input.question,
                &input.round_question,
                &input.settings,
                progress,
            )
            .await?;

        let outcome = DebateOutcome::conclude(input.settings, input.mode, transcripts);
        match &outcome.vote {
            Ok(majority) => info!(
                answer = %majority.value,
                votes = majority.count,
                total = majority.total,
                "Debate concluded"
            ),
            Err(e) => info!("Debate concluded without a vote: {}", e),
        }
        Ok(outcome)
    }

    async fn run_rounds(
        &self,
        question: &Question,
        round_question: &str,
        settings: &DebateSettings,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<Vec<AgentContext>, RunDebateError> {
        let mut contexts: Vec<AgentContext> = (0..settings.agents())
            .map(|_| AgentContext::new(question))
            .collect();

        for round in 0..settings.rounds() {
            debug!("Round {} of {}", round + 1, settings.rounds());
            progress.on_round_start(round, settings);

            let snapshot = match settings.peer_visibility() {
                PeerVisibility::RoundSnapshot if round > 0 => Some(contexts.clone()),
                _ => None,
            };

            for agent in 0..contexts.len() {
                if round > 0 {
                    let prompt = {
                        let source = snapshot.as_deref().unwrap_or(&contexts);
                        let peers: Vec<&AgentContext> = source
                            .iter()
                            .enumerate()
                            .filter(|(j, _)| *j != agent)
                            .map(|(_, ctx)| ctx)
                            .collect();
                        PromptTemplate::round_message(&peers, round_question)
                    };
                    contexts[agent].push_prompt(prompt);
                }

                let reply = complete_with_retry(
                    self.gateway.as_ref(),
                    contexts[agent].messages(),
                    &self.retry,
                    progress,
                )
                .await?;
                debug!(round, agent, "Agent responded ({} chars)", reply.content().len());
                progress.on_agent_response(round, agent, reply.content());
                contexts[agent].push_response(reply);
            }

            progress.on_round_complete(round);
        }

        Ok(contexts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::shared::test_support::ScriptedGateway;
    use debate_domain::{AnswerValue, Message, Role, VoteError};
    use std::time::Duration;

    fn question() -> Question {
        Question::try_new("What is 6*7?").unwrap()
    }

    fn use_case(gateway: ScriptedGateway) -> (Arc<ScriptedGateway>, RunDebateUseCase<ScriptedGateway>) {
        let gateway = Arc::new(gateway);
        let use_case = RunDebateUseCase::new(Arc::clone(&gateway))
            .with_retry_policy(RetryPolicy::unbounded(Duration::ZERO));
        (gateway, use_case)
    }

    #[tokio::test]
    async fn test_single_agent_single_round_has_no_round_message() {
        let (gateway, use_case) = use_case(ScriptedGateway::constant("It is 42"));
        let input = RunDebateInput::new(question(), DebateSettings::new(1, 1).unwrap());

        let outcome = use_case.execute(input).await.unwrap();

        assert_eq!(gateway.call_count(), 1);
        assert_eq!(gateway.calls()[0], vec![Message::user("What is 6*7?")]);
        let transcript = outcome.transcripts[0].messages();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1], Message::assistant("It is 42"));
        assert_eq!(
            outcome.answer(),
            Some(&AnswerValue::Text("It is 42".to_string()))
        );
    }

    #[tokio::test]
    async fn test_transcript_shape_after_rounds() {
        let (gateway, use_case) = use_case(ScriptedGateway::constant("42"));
        let input = RunDebateInput::new(question(), DebateSettings::new(3, 3).unwrap());

        let outcome = use_case.execute(input).await.unwrap();

        assert_eq!(gateway.call_count(), 9);
        for transcript in &outcome.transcripts {
            let roles: Vec<Role> = transcript.messages().iter().map(|m| m.role()).collect();
            assert_eq!(
                roles,
                vec![
                    Role::User,
                    Role::Assistant,
                    Role::User,
                    Role::Assistant,
                    Role::User,
                    Role::Assistant,
                ]
            );
        }
    }

    #[tokio::test]
    async fn test_lone_agent_gets_self_verification_prompt() {
        let (_, use_case) = use_case(ScriptedGateway::constant("42"));
        let input = RunDebateInput::new(question(), DebateSettings::new(1, 2).unwrap());

        let outcome = use_case.execute(input).await.unwrap();

        assert_eq!(
            outcome.transcripts[0].messages()[2].content(),
            debate_domain::prompt::SELF_VERIFICATION_PROMPT
        );
    }

    #[tokio::test]
    async fn test_sequential_visibility_sees_same_round_replies() {
        let (_, use_case) = use_case(ScriptedGateway::new(|i, _| format!("reply-{}", i)));
        let input = RunDebateInput::new(question(), DebateSettings::new(3, 2).unwrap());

        let outcome = use_case.execute(input).await.unwrap();

        // Calls 0..2 are round 0; agent 0 answers round 1 with reply-3.
        let prompt = outcome.transcripts[2].messages()[2].content();
        assert!(prompt.contains("```reply-3```"));
        assert!(prompt.contains("```reply-4```"));
        assert!(!prompt.contains("```reply-0```"));

        let first = outcome.transcripts[0].messages()[2].content();
        assert!(first.contains("```reply-1```"));
        assert!(first.contains("```reply-2```"));
    }

    #[tokio::test]
    async fn test_round_snapshot_visibility_sees_previous_round() {
        let (_, use_case) = use_case(ScriptedGateway::new(|i, _| format!("reply-{}", i)));
        let settings = DebateSettings::new(3, 2)
            .unwrap()
            .with_peer_visibility(PeerVisibility::RoundSnapshot);
        let input = RunDebateInput::new(question(), settings);

        let outcome = use_case.execute(input).await.unwrap();

        let prompt = outcome.transcripts[2].messages()[2].content();
        assert!(prompt.contains("```reply-0```"));
        assert!(prompt.contains("```reply-1```"));
        assert!(!prompt.contains("```reply-3```"));
    }

    #[tokio::test]
    async fn test_peers_are_in_index_order_without_self() {
        let (_, use_case) = use_case(ScriptedGateway::new(|i, _| format!("reply-{}", i)));
        let input = RunDebateInput::new(question(), DebateSettings::new(3, 2).unwrap());

        let outcome = use_case.execute(input).await.unwrap();

        // Agent 1 in round 1 sees agent 0 (reply-3, this round) then agent 2 (reply-2).
        let prompt = outcome.transcripts[1].messages()[2].content();
        let first = prompt.find("```reply-3```").unwrap();
        let second = prompt.find("```reply-2```").unwrap();
        assert!(first < second);
        assert!(!prompt.contains("```reply-1```"));
    }

    #[tokio::test]
    async fn test_numeric_mode_votes_on_numbers() {
        let (_, use_case) = use_case(ScriptedGateway::new(|i, _| match i % 3 {
            0 => "I get 42".to_string(),
            1 => "The answer is 41,0 or rather 42".to_string(),
            _ => "Honestly 40".to_string(),
        }));
        let input = RunDebateInput::new(question(), DebateSettings::new(3, 1).unwrap())
            .with_mode(AnswerMode::Numeric);

        let outcome = use_case.execute(input).await.unwrap();

        let majority = outcome.vote.unwrap();
        assert_eq!(majority.value, AnswerValue::Number(42.0));
        assert_eq!(majority.count, 2);
    }

    #[tokio::test]
    async fn test_all_unparseable_reports_no_valid_responses() {
        let (_, use_case) = use_case(ScriptedGateway::constant("no idea"));
        let input = RunDebateInput::new(question(), DebateSettings::new(2, 2).unwrap())
            .with_mode(AnswerMode::Numeric);

        let outcome = use_case.execute(input).await.unwrap();

        assert_eq!(outcome.vote, Err(VoteError::NoValidResponses));
    }

    #[tokio::test]
    async fn test_transient_failures_do_not_reach_caller() {
        let (gateway, use_case) = use_case(ScriptedGateway::constant("42").failing_first(4));
        let input = RunDebateInput::new(question(), DebateSettings::new(2, 2).unwrap());

        let outcome = use_case.execute(input).await.unwrap();

        assert_eq!(gateway.call_count(), 4);
        assert_eq!(outcome.answers.len(), 2);
    }
}
