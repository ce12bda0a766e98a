//! Shared utilities for use cases.
//!
//! Contains the retrying completion call used by every flow (debate rounds,
//! zero-shot baseline, evaluation trials).

use crate::config::RetryPolicy;
use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use crate::ports::progress::DebateProgressNotifier;
use debate_domain::Message;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while running a debate or evaluation
#[derive(Error, Debug)]
pub enum RunDebateError {
    /// Only possible with a bounded [`RetryPolicy`]
    #[error("Completion failed after {attempts} attempts: {source}")]
    CompletionFailed {
        attempts: u32,
        #[source]
        source: GatewayError,
    },
}

/// Call the gateway until it succeeds or the retry policy gives up.
///
/// Failures are logged and reported through `progress`; with the default
/// (unbounded) policy this only returns `Ok`.
pub(crate) async fn complete_with_retry<G: CompletionGateway + ?Sized>(
    gateway: &G,
    messages: &[Message],
    retry: &RetryPolicy,
    progress: &dyn DebateProgressNotifier,
) -> Result<Message, RunDebateError> {
    let mut attempt: u32 = 0;
    loop {
        attempt = attempt.saturating_add(1);
        match gateway.complete(messages).await {
            Ok(reply) if reply.is_assistant() => return Ok(reply),
            Ok(reply) => return Ok(Message::assistant(reply.content())),
            Err(error) => {
                if !retry.allows_retry(attempt) {
                    return Err(RunDebateError::CompletionFailed {
                        attempts: attempt,
                        source: error,
                    });
                }

                let delay = retry.delay_for(attempt);
                warn!(
                    attempt,
                    delay_secs = delay.as_secs_f64(),
                    error = %error,
                    "Retrying due to an error"
                );
                progress.on_retry(attempt, &error, delay);
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::ScriptedGateway;
    use super::*;
    use crate::ports::progress::NoProgress;
    use debate_domain::DebateSettings;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RetryRecorder {
        retries: Mutex<Vec<(u32, Duration)>>,
    }

    impl DebateProgressNotifier for RetryRecorder {
        fn on_round_start(&self, _round: usize, _settings: &DebateSettings) {}
        fn on_agent_response(&self, _round: usize, _agent: usize, _response: &str) {}
        fn on_round_complete(&self, _round: usize) {}

        fn on_retry(&self, attempt: u32, _error: &GatewayError, delay: Duration) {
            self.retries.lock().unwrap().push((attempt, delay));
        }
    }

    #[tokio::test]
    async fn test_retries_until_success() {
        let gateway = ScriptedGateway::constant("42").failing_first(3);
        let recorder = RetryRecorder::default();
        let policy = RetryPolicy::unbounded(Duration::ZERO);

        let reply = complete_with_retry(&gateway, &[Message::user("q")], &policy, &recorder)
            .await
            .unwrap();

        assert_eq!(reply, Message::assistant("42"));
        let retries = recorder.retries.lock().unwrap().clone();
        assert_eq!(
            retries,
            vec![(1, Duration::ZERO), (2, Duration::ZERO), (3, Duration::ZERO)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_policy_waits_fixed_delay() {
        let gateway = ScriptedGateway::constant("ok").failing_first(2);
        let started = tokio::time::Instant::now();

        complete_with_retry(
            &gateway,
            &[Message::user("q")],
            &RetryPolicy::default(),
            &NoProgress,
        )
        .await
        .unwrap();

        assert_eq!(started.elapsed(), Duration::from_secs(40));
    }

    #[tokio::test]
    async fn test_bounded_policy_surfaces_last_error() {
        let gateway = ScriptedGateway::constant("never").failing_first(5);
        let policy = RetryPolicy::unbounded(Duration::ZERO).with_max_attempts(2);

        let err = complete_with_retry(&gateway, &[Message::user("q")], &policy, &NoProgress)
            .await
            .unwrap_err();

        match err {
            RunDebateError::CompletionFailed { attempts, source } => {
                assert_eq!(attempts, 2);
                assert!(matches!(source, GatewayError::RateLimited(_)));
            }
        }
        assert_eq!(gateway.call_count(), 0);
    }
}
