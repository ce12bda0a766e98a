//! Evaluation settings

use crate::core::error::DomainError;
use crate::debate::settings::check_range;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed number of trials per evaluation
pub const TRIAL_RANGE: RangeInclusive<usize> = 10..=100;

pub const DEFAULT_TRIALS: usize = 20;

/// How many trials to run and how to draw them (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEvaluationSettings")]
pub struct EvaluationSettings {
    trials: usize,
    seed: Option<u64>,
    concurrency: usize,
}

#[derive(Deserialize)]
struct RawEvaluationSettings {
    trials: usize,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    concurrency: usize,
}

impl TryFrom<RawEvaluationSettings> for EvaluationSettings {
    type Error = DomainError;

    fn try_from(raw: RawEvaluationSettings) -> Result<Self, Self::Error> {
        let settings = Self::new(raw.trials)?.with_concurrency(raw.concurrency);
        Ok(match raw.seed {
            Some(seed) => settings.with_seed(seed),
            None => settings,
        })
    }
}

impl EvaluationSettings {
    pub fn new(trials: usize) -> Result<Self, DomainError> {
        check_range("trials", trials, &TRIAL_RANGE)?;
        Ok(Self {
            trials,
            seed: None,
            concurrency: 1,
        })
    }

    /// Fix the random seed so the same problems are drawn on every run
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run up to `concurrency` trials at once (clamped to at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            concurrency: 1,
        }
    }
}
