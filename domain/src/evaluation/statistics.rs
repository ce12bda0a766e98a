//! Accuracy statistics over a batch of trials

use serde::{Deserialize, Serialize};

/// Mean and standard error of binary correctness scores (Value Object)
///
/// `mean` and `standard_error` are NaN when no trial was scored; check
/// [`is_defined`](Self::is_defined) before displaying them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    pub mean: f64,
    pub standard_error: f64,
    /// Trials that contributed a score
    pub scored: usize,
    /// Trials excluded because no agent gave a usable answer
    pub skipped: usize,
}

impl RunStatistics {
    /// Summarize 0/1 scores.
    ///
    /// The standard error is the population standard deviation divided by
    /// the square root of the number of scored trials.
    pub fn from_scores(scores: &[u8], skipped: usize) -> Self {
        let scored = scores.len();
        if scored == 0 {
            return Self {
                mean: f64::NAN,
                standard_error: f64::NAN,
                scored,
                skipped,
            };
        }

        let n = scored as f64;
        let mean = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / n;
        let variance = scores
            .iter()
            .map(|&s| (f64::from(s) - mean).powi(2))
            .sum::<f64>()
            / n;
        let standard_error = variance.sqrt() / n.sqrt();

        Self {
            mean,
            standard_error,
            scored,
            skipped,
        }
    }

    /// Whether at least one trial was scored
    pub fn is_defined(&self) -> bool {
        self.scored > 0
    }

    /// Number of correct trials
    pub fn correct(&self) -> usize {
        if self.is_defined() {
            (self.mean * self.scored as f64).round() as usize
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_correct() {
        let stats = RunStatistics::from_scores(&[1, 1, 0, 0], 0);
        assert_eq!(stats.mean, 0.5);
        assert_eq!(stats.standard_error, 0.25);
        assert_eq!(stats.correct(), 2);
        assert!(stats.is_defined());
    }

    #[test]
    fn test_all_correct_has_zero_error() {
        let stats = RunStatistics::from_scores(&[1, 1, 1], 2);
        assert_eq!(stats.mean, 1.0);
        assert_eq!(stats.standard_error, 0.0);
        assert_eq!(stats.scored, 3);
        assert_eq!(stats.skipped, 2);
    }

    #[test]
    fn test_nothing_scored_is_undefined() {
        let stats = RunStatistics::from_scores(&[], 5);
        assert!(!stats.is_defined());
        assert!(stats.mean.is_nan());
        assert!(stats.standard_error.is_nan());
        assert_eq!(stats.skipped, 5);
        assert_eq!(stats.correct(), 0);
    }
}
