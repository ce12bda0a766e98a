//! Per-trial records

use super::problem::ArithmeticProblem;
use super::statistics::RunStatistics;
use crate::debate::answer::AnswerValue;
use crate::debate::vote::VoteError;
use serde::{Deserialize, Serialize};

/// How a trial counted towards the statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrialScore {
    /// 1 if the answer equals the ground truth, else 0
    Scored { score: u8 },
    /// Left out of the statistics entirely
    Skipped { reason: VoteError },
}

impl TrialScore {
    /// Score an answer against the ground truth
    pub fn judge(answer: Option<&AnswerValue>, ground_truth: i64) -> Self {
        let correct = answer.is_some_and(|a| a.equals_integer(ground_truth));
        TrialScore::Scored {
            score: u8::from(correct),
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, TrialScore::Scored { score: 1 })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, TrialScore::Skipped { .. })
    }
}

/// One evaluated problem (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationTrial {
    /// Position of the trial in the batch (0-based)
    pub index: usize,
    pub problem: ArithmeticProblem,
    pub ground_truth: i64,
    /// Extracted answer per agent (a single entry for the zero-shot baseline)
    pub agent_answers: Vec<Option<AnswerValue>>,
    /// Majority answer, `None` when nothing could be parsed
    pub voted: Option<AnswerValue>,
    pub score: TrialScore,
}

impl EvaluationTrial {
    /// Score a debate trial; a failed vote skips the trial.
    pub fn from_vote(
        index: usize,
        problem: ArithmeticProblem,
        agent_answers: Vec<Option<AnswerValue>>,
        vote: Result<AnswerValue, VoteError>,
    ) -> Self {
        let ground_truth = problem.ground_truth();
        let (voted, score) = match vote {
            Ok(value) => {
                let score = TrialScore::judge(Some(&value), ground_truth);
                (Some(value), score)
            }
            Err(reason) => (None, TrialScore::Skipped { reason }),
        };

        Self {
            index,
            problem,
            ground_truth,
            agent_answers,
            voted,
            score,
        }
    }

    /// Score a single-answer trial; an unparseable answer scores 0.
    pub fn from_single_answer(
        index: usize,
        problem: ArithmeticProblem,
        answer: Option<AnswerValue>,
    ) -> Self {
        let ground_truth = problem.ground_truth();
        let score = TrialScore::judge(answer.as_ref(), ground_truth);
        Self {
            index,
            problem,
            ground_truth,
            agent_answers: vec![answer.clone()],
            voted: answer,
            score,
        }
    }
}

/// Statistics plus the trials that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub statistics: RunStatistics,
    pub trials: Vec<EvaluationTrial>,
}

impl EvaluationReport {
    pub fn from_trials(trials: Vec<EvaluationTrial>) -> Self {
        let scores: Vec<u8> = trials
            .iter()
            .filter_map(|t| match t.score {
                TrialScore::Scored { score } => Some(score),
                TrialScore::Skipped { .. } => None,
            })
            .collect();
        let skipped = trials.iter().filter(|t| t.score.is_skipped()).count();

        Self {
            statistics: RunStatistics::from_scores(&scores, skipped),
            trials,
        }
    }
}
