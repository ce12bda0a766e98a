//! Run Evaluation use case
//!
//! Scores debate and the zero-shot baseline on randomized arithmetic problems.

use crate::config::RetryPolicy;
use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::progress::{
    DebateProgressNotifier, EvaluationKind, NoProgress, TrialScopedProgress,
};
use crate::use_cases::run_debate::{RunDebateInput, RunDebateUseCase};
use crate::use_cases::run_zero_shot::RunZeroShotUseCase;
use crate::use_cases::shared::RunDebateError;
use chrono::{DateTime, Utc};
use debate_domain::{
    AnswerMode, ArithmeticProblem, DebateSettings, EvaluationReport, EvaluationSettings,
    EvaluationTrial,
};
use futures::stream::{self, StreamExt};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the [`RunEvaluationUseCase`].
#[derive(Debug, Clone)]
pub struct RunEvaluationInput {
    pub debate: DebateSettings,
    pub evaluation: EvaluationSettings,
    /// Also score the zero-shot baseline
    pub include_zero_shot: bool,
}

impl RunEvaluationInput {
    pub fn new(debate: DebateSettings, evaluation: EvaluationSettings) -> Self {
        Self {
            debate,
            evaluation,
            include_zero_shot: true,
        }
    }

    pub fn without_zero_shot(mut self) -> Self {
        self.include_zero_shot = false;
        self
    }
}

/// Debate vs. zero-shot accuracy on the same kind of problems
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub model: String,
    pub debate_settings: DebateSettings,
    pub evaluation_settings: EvaluationSettings,
    pub debate: EvaluationReport,
    pub zero_shot: Option<EvaluationReport>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Use case for the arithmetic evaluation
///
/// Problems are drawn from the RNG up front, in trial order, so a fixed seed
/// gives the same problems regardless of `concurrency`. With a seed, the debate
/// and zero-shot batches see the same problem sequence.
pub struct RunEvaluationUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    retry: RetryPolicy,
}

impl<G: CompletionGateway + 'static> RunEvaluationUseCase<G> {
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
    pub async fn execute(
        &self,
        input: RunEvaluationInput,
    ) -> Result<ComparisonReport, RunDebateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Run the debate batch, then (optionally) the zero-shot batch
    pub async fn execute_with_progress(
        &self,
        input: RunEvaluationInput,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<ComparisonReport, RunDebateError> {
        let started_at = Utc::now();
        info!(
            trials = input.evaluation.trials(),
            seed = ?input.evaluation.seed(),
            concurrency = input.evaluation.concurrency(),
            "Starting evaluation"
        );

        let debate = self
            .evaluate_debate(&input.debate, &input.evaluation, progress)
            .await?;

        let zero_shot = if input.include_zero_shot {
            Some(self.evaluate_zero_shot(&input.evaluation, progress).await?)
        } else {
            None
        };

        Ok(ComparisonReport {
            model: self.gateway.model_name().to_string(),
            debate_settings: input.debate,
            evaluation_settings: input.evaluation,
            debate,
            zero_shot,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Score the debate (numeric mode) over a batch of problems.
    ///
    /// Trials whose vote has no valid responses are skipped.
    pub async fn evaluate_debate(
        &self,
        debate: &DebateSettings,
        evaluation: &EvaluationSettings,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<EvaluationReport, RunDebateError> {
        let kind = EvaluationKind::Debate;
        let problems = draw_problems(evaluation);
        progress.on_evaluation_start(kind, problems.len());

        let use_case =
            RunDebateUseCase::new(Arc::clone(&self.gateway)).with_retry_policy(self.retry);
        let scoped = TrialScopedProgress::new(progress);
        let use_case = &use_case;
        let scoped = &scoped;

        let mut results = stream::iter(problems.into_iter().enumerate())
            .map(move |(index, problem)| async move {
                let input = RunDebateInput::new(problem.question(), *debate)
                    .with_round_question(problem.round_question())
                    .with_mode(AnswerMode::Numeric);
                let outcome = use_case.execute_with_progress(input, scoped).await?;
                let agent_answers = outcome.answers.iter().map(|a| a.answer.clone()).collect();
                let vote = outcome.vote.map(|majority| majority.value);
                Ok::<_, RunDebateError>(EvaluationTrial::from_vote(
                    index,
                    problem,
                    agent_answers,
                    vote,
                ))
            })
            .buffered(evaluation.concurrency());

        let mut trials = Vec::with_capacity(evaluation.trials());
        while let Some(result) = results.next().await {
            let trial = result?;
            debug!(index = trial.index, score = ?trial.score, "Debate trial complete");
            progress.on_trial_complete(kind, &trial);
            trials.push(trial);
        }

        let report = EvaluationReport::from_trials(trials);
        info!(
            mean = report.statistics.mean,
            standard_error = report.statistics.standard_error,
            scored = report.statistics.scored,
            skipped = report.statistics.skipped,
            "Debate evaluation complete"
        );
        progress.on_evaluation_complete(kind, &report.statistics);
        Ok(report)
    }

    /// Score one completion call per problem.
    ///
    /// An unparseable answer scores 0.
    pub async fn evaluate_zero_shot(
        &self,
        evaluation: &EvaluationSettings,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<EvaluationReport, RunDebateError> {
        let kind = EvaluationKind::ZeroShot;
        let problems = draw_problems(evaluation);
        progress.on_evaluation_start(kind, problems.len());

        let use_case =
            RunZeroShotUseCase::new(Arc::clone(&self.gateway)).with_retry_policy(self.retry);
        let use_case = &use_case;

        let mut results = stream::iter(problems.into_iter().enumerate())
            .map(move |(index, problem)| async move {
                let outcome = use_case
                    .execute_with_progress(&problem.question(), AnswerMode::Numeric, progress)
                    .await?;
                Ok::<_, RunDebateError>(EvaluationTrial::from_single_answer(
                    index,
                    problem,
                    outcome.answer,
                ))
            })
            .buffered(evaluation.concurrency());

        let mut trials = Vec::with_capacity(evaluation.trials());
        while let Some(result) = results.next().await {
            let trial = result?;
            debug!(index = trial.index, score = ?trial.score, "Zero-shot trial complete");
            progress.on_trial_complete(kind, &trial);
            trials.push(trial);
        }

        let report = EvaluationReport::from_trials(trials);
        info!(
            mean = report.statistics.mean,
            standard_error = report.statistics.standard_error,
            "Zero-shot evaluation complete"
        );
        progress.on_evaluation_complete(kind, &report.statistics);
        Ok(report)
    }
}

/// Draw every trial's problem before any trial runs
fn draw_problems(evaluation: &EvaluationSettings) -> Vec<ArithmeticProblem> {
    let mut rng = match evaluation.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..evaluation.trials())
        .map(|_| ArithmeticProblem::generate(&mut rng))
        .collect()
}
