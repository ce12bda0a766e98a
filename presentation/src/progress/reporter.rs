//! Progress reporting for debates and evaluations

use colored::Colorize;
use debate_application::{DebateProgressNotifier, EvaluationKind, GatewayError};
use debate_domain::core::string::one_line_preview;
use debate_domain::{DebateSettings, EvaluationTrial, RunStatistics, TrialScore};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with indicatif progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    round_bar: Mutex<Option<ProgressBar>>,
    evaluation_bar: Mutex<Option<ProgressBar>>,
    total_rounds: Mutex<usize>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            round_bar: Mutex::new(None),
            evaluation_bar: Mutex::new(None),
            total_rounds: Mutex::new(0),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn new_bar(&self, len: usize, prefix: String) -> ProgressBar {
        let pb = self.multi.add(ProgressBar::new(len as u64));
        pb.set_style(Self::bar_style());
        pb.set_prefix(prefix);
        pb.set_message("Starting...");
        pb
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateProgressNotifier for ProgressReporter {
    fn on_round_start(&self, round: usize, settings: &DebateSettings) {
        *self.total_rounds.lock().unwrap() = settings.rounds();
        let pb = self.new_bar(
            settings.agents(),
            format!("Round {}/{}", round + 1, settings.rounds()),
        );
        *self.round_bar.lock().unwrap() = Some(pb);
    }

    fn on_agent_response(&self, _round: usize, agent: usize, response: &str) {
        if let Some(pb) = self.round_bar.lock().unwrap().as_ref() {
            pb.set_message(format!(
                "{} Agent {}: {}",
                "v".green(),
                agent + 1,
                one_line_preview(response, 40)
            ));
            pb.inc(1);
        }
    }

    fn on_round_complete(&self, round: usize) {
        if let Some(pb) = self.round_bar.lock().unwrap().take() {
            let total = *self.total_rounds.lock().unwrap();
            pb.finish_with_message(format!(
                "{}",
                format!("Round {}/{} complete!", round + 1, total).green()
            ));
        }
    }

    fn on_retry(&self, attempt: u32, error: &GatewayError, delay: Duration) {
        let _ = self.multi.println(format!(
            "{} Retrying due to an error (attempt {}, waiting {}s): {}",
            "!".yellow().bold(),
            attempt,
            delay.as_secs(),
            error
        ));
    }

    fn on_evaluation_start(&self, kind: EvaluationKind, trials: usize) {
        let pb = self.new_bar(trials, kind.to_string());
        *self.evaluation_bar.lock().unwrap() = Some(pb);
    }

    fn on_trial_complete(&self, _kind: EvaluationKind, trial: &EvaluationTrial) {
        if let Some(pb) = self.evaluation_bar.lock().unwrap().as_ref() {
            pb.set_message(format!(
                "Trial {}: {}",
                trial.index + 1,
                trial_status(&trial.score)
            ));
            pb.inc(1);
        }
    }

    fn on_evaluation_complete(&self, kind: EvaluationKind, statistics: &RunStatistics) {
        if let Some(pb) = self.evaluation_bar.lock().unwrap().take() {
            pb.finish_with_message(format!("{} {}", kind, summary(statistics).green()));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl DebateProgressNotifier for SimpleProgress {
    fn on_round_start(&self, round: usize, settings: &DebateSettings) {
        eprintln!(
            "{} {} ({} agents)",
            "->".cyan(),
            format!("Round {}/{}", round + 1, settings.rounds()).bold(),
            settings.agents()
        );
    }

    fn on_agent_response(&self, _round: usize, agent: usize, response: &str) {
        eprintln!(
            "  {} Agent {}: {}",
            "v".green(),
            agent + 1,
            one_line_preview(response, 60)
        );
    }

    fn on_round_complete(&self, _round: usize) {
        eprintln!();
    }

    fn on_retry(&self, attempt: u32, error: &GatewayError, delay: Duration) {
        eprintln!(
            "  {} Retrying due to an error (attempt {}, waiting {}s): {}",
            "!".yellow(),
            attempt,
            delay.as_secs(),
            error
        );
    }

    fn on_evaluation_start(&self, kind: EvaluationKind, trials: usize) {
        eprintln!("{} {} ({} trials)", "->".cyan(), kind.to_string().bold(), trials);
    }

    fn on_trial_complete(&self, _kind: EvaluationKind, trial: &EvaluationTrial) {
        eprintln!(
            "  Trial {:>3}: {} = {} -> {}",
            trial.index + 1,
            trial.problem.expression(),
            trial.ground_truth,
            trial_status(&trial.score)
        );
    }

    fn on_evaluation_complete(&self, kind: EvaluationKind, statistics: &RunStatistics) {
        eprintln!("{} {}: {}\n", "=>".cyan(), kind, summary(statistics));
    }
}

fn trial_status(score: &TrialScore) -> String {
    match score {
        TrialScore::Scored { score: 1 } => "correct".green().to_string(),
        TrialScore::Scored { .. } => "wrong".red().to_string(),
        TrialScore::Skipped { reason } => format!("skipped ({})", reason).yellow().to_string(),
    }
}

fn summary(statistics: &RunStatistics) -> String {
    if statistics.is_defined() {
        format!(
            "mean {:.3} ± {:.3}",
            statistics.mean, statistics.standard_error
        )
    } else {
        "no trial scored".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_status() {
        colored::control::set_override(false);
        assert_eq!(trial_status(&TrialScore::Scored { score: 1 }), "correct");
        assert_eq!(trial_status(&TrialScore::Scored { score: 0 }), "wrong");
        assert_eq!(
            trial_status(&TrialScore::Skipped {
                reason: debate_domain::VoteError::NoValidResponses
            }),
            "skipped (No valid responses from agents.)"
        );
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            summary(&RunStatistics::from_scores(&[1, 1, 0, 0], 0)),
            "mean 0.500 ± 0.250"
        );
        assert_eq!(summary(&RunStatistics::from_scores(&[], 2)), "no trial scored");
    }

    #[test]
    fn test_reporter_handles_events_without_start() {
        let reporter = ProgressReporter::new();
        reporter.on_agent_response(0, 0, "ignored");
        reporter.on_round_complete(0);
        reporter.on_evaluation_complete(
            EvaluationKind::Debate,
            &RunStatistics::from_scores(&[1], 0),
        );
    }
}
