//! Debate outcome entities
//!
//! - [`AgentAnswer`] - one agent's final response and the value read from it
//! - [`DebateOutcome`] - transcripts, per-agent answers and the vote of one debate
//! - [`ZeroShotOutcome`] - the single-call baseline for the same question

use super::answer::{AnswerMode, AnswerValue};
use super::settings::DebateSettings;
use super::vote::{Majority, VoteError, majority_vote};
use crate::session::context::AgentContext;
use serde::{Deserialize, Serialize};

/// Final answer of a single agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentAnswer {
    /// Agent index (0-based)
    pub agent: usize,
    /// Content of the agent's last message
    pub response: String,
    /// Extracted answer, `None` if unparseable
    pub answer: Option<AnswerValue>,
}

/// Complete result of one debate run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateOutcome {
    pub settings: DebateSettings,
    pub mode: AnswerMode,
    /// One transcript per agent, in agent order
    pub transcripts: Vec<AgentContext>,
    pub answers: Vec<AgentAnswer>,
    /// Majority over the parseable answers
    pub vote: Result<Majority<AnswerValue>, VoteError>,
}

impl DebateOutcome {
    /// Read every agent's last message, extract answers and vote.
    pub fn conclude(
        settings: DebateSettings,
        mode: AnswerMode,
        transcripts: Vec<AgentContext>,
    ) -> Self {
        let answers: Vec<AgentAnswer> = transcripts
            .iter()
            .enumerate()
            .map(|(agent, ctx)| {
                let response = ctx.latest().content().to_string();
                let answer = mode.extract(&response);
                AgentAnswer {
                    agent,
                    response,
                    answer,
                }
            })
            .collect();

        let ballots: Vec<AnswerValue> = answers.iter().filter_map(|a| a.answer.clone()).collect();
        let vote = majority_vote(&ballots);

        Self {
            settings,
            mode,
            transcripts,
            answers,
            vote,
        }
    }

    /// The winning answer, if any agent produced a usable one
    pub fn answer(&self) -> Option<&AnswerValue> {
        self.vote.as_ref().ok().map(|m| &m.value)
    }

    /// Number of agents whose final response could not be parsed
    pub fn unparseable_count(&self) -> usize {
        self.answers.iter().filter(|a| a.answer.is_none()).count()
    }
}

/// Result of the zero-shot baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroShotOutcome {
    pub response: String,
    pub answer: Option<AnswerValue>,
}

impl ZeroShotOutcome {
    pub fn new(mode: AnswerMode, response: impl Into<String>) -> Self {
        let response = response.into();
        let answer = mode.extract(&response);
        Self { response, answer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::question::Question;
    use crate::session::entities::Message;

    fn transcript(reply: &str) -> AgentContext {
        let mut ctx = AgentContext::new(&Question::try_new("What is 2+3*4?").unwrap());
        ctx.push_response(Message::assistant(reply));
        ctx
    }

    #[test]
    fn test_conclude_numeric_filters_unparseable() {
        let outcome = DebateOutcome::conclude(
            DebateSettings::new(3, 1).unwrap(),
            AnswerMode::Numeric,
            vec![
                transcript("I am not sure"),
                transcript("It is 14"),
                transcript("2 + 12 = 14"),
            ],
        );

        assert_eq!(outcome.unparseable_count(), 1);
        assert_eq!(outcome.answers[0].answer, None);
        let majority = outcome.vote.as_ref().unwrap();
        assert_eq!(majority.value, AnswerValue::Number(14.0));
        assert_eq!(majority.count, 2);
        assert_eq!(majority.total, 2);
    }

    #[test]
    fn test_conclude_all_unparseable() {
        let outcome = DebateOutcome::conclude(
            DebateSettings::new(2, 1).unwrap(),
            AnswerMode::Numeric,
            vec![transcript("no idea"), transcript("pass")],
        );
        assert_eq!(outcome.vote, Err(VoteError::NoValidResponses));
        assert!(outcome.answer().is_none());
    }

    #[test]
    fn test_conclude_freeform_keeps_text() {
        let outcome = DebateOutcome::conclude(
            DebateSettings::new(2, 1).unwrap(),
            AnswerMode::Freeform,
            vec![transcript(" Paris "), transcript("Lyon")],
        );
        assert_eq!(
            outcome.answer(),
            Some(&AnswerValue::Text("Paris".to_string()))
        );
    }

    #[test]
    fn test_conclude_freeform_counts_blank_replies() {
        let outcome = DebateOutcome::conclude(
            DebateSettings::new(3, 1).unwrap(),
            AnswerMode::Freeform,
            vec![transcript("   "), transcript(""), transcript("Paris")],
        );
        assert_eq!(outcome.unparseable_count(), 0);
        let majority = outcome.vote.as_ref().unwrap();
        assert_eq!(majority.value, AnswerValue::Text(String::new()));
        assert_eq!(majority.count, 2);
        assert_eq!(majority.total, 3);
    }

    #[test]
    fn test_zero_shot_outcome() {
        let outcome = ZeroShotOutcome::new(AnswerMode::Numeric, "That gives 1,5");
        assert_eq!(outcome.answer, Some(AnswerValue::Number(1.5)));
    }
}
