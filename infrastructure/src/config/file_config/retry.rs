//! Retry configuration from TOML (`[retry]` section)

use debate_application::{Backoff, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Delay between attempts (initial delay when `exponential` is set)
    pub delay_seconds: u64,
    /// Unset retries forever
    pub max_attempts: Option<u32>,
    /// Double the delay after each failure, capped at `max_delay_seconds`
    pub exponential: bool,
    pub max_delay_seconds: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        Self {
            delay_seconds: 20,
            max_attempts: None,
            exponential: false,
            max_delay_seconds: 300,
        }
    }
}

impl FileRetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        let delay = Duration::from_secs(self.delay_seconds);
        let backoff = if self.exponential {
            Backoff::Exponential {
                initial: delay,
                max: Duration::from_secs(self.max_delay_seconds.max(self.delay_seconds)),
            }
        } else {
            Backoff::Fixed(delay)
        };

        let policy = RetryPolicy::default().with_backoff(backoff);
        match self.max_attempts {
            Some(max) => policy.with_max_attempts(max),
            None => policy,
        }
    }
}
