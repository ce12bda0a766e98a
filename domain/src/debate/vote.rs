//! Majority vote over agents' final answers

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a vote could not produce a winner
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteError {
    /// Every agent's answer was unparseable (or there were no agents)
    #[error("No valid responses from agents.")]
    NoValidResponses,
}

/// Result of a majority vote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Majority<T> {
    /// The winning value
    pub value: T,
    /// How many ballots carried the winning value
    pub count: usize,
    /// Total number of ballots counted
    pub total: usize,
}

impl<T> Majority<T> {
    /// Whether every ballot agreed
    pub fn is_unanimous(&self) -> bool {
        self.count == self.total
    }

    /// Share of ballots carrying the winner (0.0 to 1.0)
    pub fn agreement_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count as f64 / self.total as f64
        }
    }
}

/// Pick the most frequent value.
///
/// Frequencies are counted over the whole slice; among values sharing the
/// highest count, the one that appears first in `ballots` wins. Only a
/// strictly higher count replaces the current leader.
///
/// # Example
///
/// ```
/// use debate_domain::debate::vote::majority_vote;
///
/// let majority = majority_vote(&[1, 2, 1, 2]).unwrap();
/// assert_eq!(majority.value, 1);
/// assert_eq!(majority.count, 2);
/// ```
pub fn majority_vote<T: PartialEq + Clone>(ballots: &[T]) -> Result<Majority<T>, VoteError> {
    let first = ballots.first().ok_or(VoteError::NoValidResponses)?;

    let mut leader = first;
    let mut leader_count = 0;
    for candidate in ballots {
        let count = ballots.iter().filter(|b| *b == candidate).count();
        if count > leader_count {
            leader = candidate;
            leader_count = count;
        }
    }

    Ok(Majority {
        value: leader.clone(),
        count: leader_count,
        total: ballots.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::answer::AnswerValue;

    #[test]
    fn test_tie_break_is_positional() {
        let majority = majority_vote(&[1, 2, 1, 2]).unwrap();
        assert_eq!(majority.value, 1);

        let majority = majority_vote(&[2, 1, 1, 2]).unwrap();
        assert_eq!(majority.value, 2);
    }

    #[test]
    fn test_tie_break_is_not_lexical() {
        let ballots = vec!["zebra".to_string(), "apple".to_string()];
        assert_eq!(majority_vote(&ballots).unwrap().value, "zebra");
    }

    #[test]
    fn test_strict_majority_wins_regardless_of_position() {
        let majority = majority_vote(&[3, 5, 5, 4, 5]).unwrap();
        assert_eq!(majority.value, 5);
        assert_eq!(majority.count, 3);
        assert_eq!(majority.total, 5);
        assert!(!majority.is_unanimous());
        assert_eq!(majority.agreement_ratio(), 0.6);
    }

    #[test]
    fn test_empty_input_has_no_valid_responses() {
        let empty: [AnswerValue; 0] = [];
        assert_eq!(majority_vote(&empty), Err(VoteError::NoValidResponses));
        assert_eq!(
            VoteError::NoValidResponses.to_string(),
            "No valid responses from agents."
        );
    }

    #[test]
    fn test_winner_is_member_with_maximal_count() {
        let ballots = [
            AnswerValue::Number(10.0),
            AnswerValue::Number(-3.0),
            AnswerValue::Number(-3.0),
            AnswerValue::Number(10.0),
            AnswerValue::Number(7.0),
        ];
        let majority = majority_vote(&ballots).unwrap();
        assert!(ballots.contains(&majority.value));
        let max = ballots
            .iter()
            .map(|v| ballots.iter().filter(|b| *b == v).count())
            .max()
            .unwrap();
        assert_eq!(majority.count, max);
        assert_eq!(majority.value, AnswerValue::Number(10.0));
    }

    #[test]
    fn test_single_ballot_is_unanimous() {
        let majority = majority_vote(&[AnswerValue::Text("yes".into())]).unwrap();
        assert!(majority.is_unanimous());
    }
}
