//! Console output formatter for debate results

use colored::Colorize;
use debate_application::{AskResult, ComparisonReport};
use debate_domain::core::string::one_line_preview;
use debate_domain::{
    AgentAnswer, AnswerValue, DebateOutcome, EvaluationReport, EvaluationTrial, Majority,
    RunStatistics, TrialScore,
};
use serde::Serialize;

const PREVIEW_WIDTH: usize = 60;

/// Formats debate and evaluation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the open-ended flow: every agent's final answer, the vote and the
    /// zero-shot answer
    pub fn format_ask(result: &AskResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Multi-Agent Debate"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            result.question
        ));
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), result.model));
        output.push_str(&format!(
            "{} {} agents, {} rounds ({} visibility)\n",
            "Debate:".cyan().bold(),
            result.debate.settings.agents(),
            result.debate.settings.rounds(),
            result.debate.settings.peer_visibility()
        ));

        output.push_str(&Self::section_header("Final Responses"));
        for answer in &result.debate.answers {
            output.push_str(&Self::agent_block(answer));
        }

        output.push_str(&Self::section_header("Majority Vote"));
        output.push_str(&Self::vote_line(&result.debate));
        output.push('\n');

        if let Some(zero_shot) = &result.zero_shot {
            output.push_str(&Self::section_header("Zero-Shot Answer"));
            output.push_str(&format!("\n{}\n", zero_shot.response));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the arithmetic evaluation comparison
    pub fn format_evaluation(report: &ComparisonReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Debate vs. Zero-Shot"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), report.model));
        output.push_str(&format!(
            "{} {} agents, {} rounds ({} visibility)\n",
            "Debate:".cyan().bold(),
            report.debate_settings.agents(),
            report.debate_settings.rounds(),
            report.debate_settings.peer_visibility()
        ));
        let seed = report
            .evaluation_settings
            .seed()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string());
        output.push_str(&format!(
            "{} {} trials, seed {}\n",
            "Evaluation:".cyan().bold(),
            report.evaluation_settings.trials(),
            seed
        ));
        let elapsed = report.finished_at - report.started_at;
        output.push_str(&format!(
            "{} {:.1}s\n",
            "Elapsed:".cyan().bold(),
            elapsed.num_milliseconds() as f64 / 1000.0
        ));

        output.push_str(&Self::section_header("Multi-Agent Debate Trials"));
        output.push_str(&Self::trial_table(&report.debate));

        if let Some(zero_shot) = &report.zero_shot {
            output.push_str(&Self::section_header("Zero-Shot Trials"));
            output.push_str(&Self::trial_table(zero_shot));
        }

        output.push_str(&Self::section_header("Accuracy"));
        output.push_str(&format!(
            "{:<20} {}\n",
            "Multi-Agent Debate",
            Self::statistics_line(&report.debate.statistics)
        ));
        if let Some(zero_shot) = &report.zero_shot {
            output.push_str(&format!(
                "{:<20} {}\n",
                "Zero-Shot",
                Self::statistics_line(&zero_shot.statistics)
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format any serializable result as pretty JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// `mean ± standard error`, or a note when nothing was scored
    pub fn statistics_line(statistics: &RunStatistics) -> String {
        if !statistics.is_defined() {
            return format!(
                "{} ({} skipped)",
                "undefined, no trial was scored".yellow(),
                statistics.skipped
            );
        }

        let mut line = format!(
            "{} ± {} ({}/{} correct",
            format!("{:.3}", statistics.mean).bold(),
            format_args!("{:.3}", statistics.standard_error),
            statistics.correct(),
            statistics.scored
        );
        if statistics.skipped > 0 {
            line.push_str(&format!(", {} skipped", statistics.skipped));
        }
        line.push(')');
        line
    }

    fn agent_block(answer: &AgentAnswer) -> String {
        let parsed = answer
            .answer
            .as_ref()
            .map(|a| one_line_preview(&a.to_string(), PREVIEW_WIDTH))
            .unwrap_or_else(|| "unparseable".to_string());
        format!(
            "\n{} {}\n{}\n",
            format!("── Agent {} ──", answer.agent + 1).yellow().bold(),
            format!("[{}]", parsed).dimmed(),
            answer.response
        )
    }

    fn vote_line(outcome: &DebateOutcome) -> String {
        match &outcome.vote {
            Ok(majority) => Self::majority_line(majority),
            Err(err) => format!("\n{}\n", err.to_string().red()),
        }
    }

    fn majority_line(majority: &Majority<AnswerValue>) -> String {
        let agreement = if majority.is_unanimous() {
            "unanimous".green().to_string()
        } else {
            format!("{}/{} agents agree", majority.count, majority.total)
                .yellow()
                .to_string()
        };
        format!("\n{}\n\n{}\n", agreement, majority.value)
    }

    fn trial_table(report: &EvaluationReport) -> String {
        let mut output = format!(
            "{:>4}  {:<22} {:>7}  {:<20} {:>7}  {}\n",
            "#", "Problem", "Truth", "Answers", "Voted", "Result"
        );
        for trial in &report.trials {
            output.push_str(&Self::trial_row(trial));
        }
        output
    }

    fn trial_row(trial: &EvaluationTrial) -> String {
        let answers = trial
            .agent_answers
            .iter()
            .map(|a| a.as_ref().map_or_else(|| "-".to_string(), |v| v.to_string()))
            .collect::<Vec<_>>()
            .join(",");
        let voted = trial
            .voted
            .as_ref()
            .map_or_else(|| "-".to_string(), |v| v.to_string());
        let result = match trial.score {
            TrialScore::Scored { score: 1 } => "correct".green(),
            TrialScore::Scored { .. } => "wrong".red(),
            TrialScore::Skipped { .. } => "skipped".yellow(),
        };

        format!(
            "{:>4}  {:<22} {:>7}  {:<20} {:>7}  {}\n",
            trial.index + 1,
            trial.problem.expression(),
            trial.ground_truth,
            one_line_preview(&answers, 20),
            voted,
            result
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use debate_domain::{
        AgentContext, AnswerMode, ArithmeticProblem, DebateSettings, EvaluationSettings,
        Message, Question, VoteError, ZeroShotOutcome,
    };

    fn plain() {
        colored::control::set_override(false);
    }

    fn outcome(replies: &[&str]) -> DebateOutcome {
        let question = Question::try_new("What is the capital of France?").unwrap();
        let transcripts = replies
            .iter()
            .map(|reply| {
                let mut ctx = AgentContext::new(&question);
                ctx.push_response(Message::assistant(*reply));
                ctx
            })
            .collect();
        DebateOutcome::conclude(
            DebateSettings::new(replies.len(), 1).unwrap(),
            AnswerMode::Freeform,
            transcripts,
        )
    }

    fn ask_result(replies: &[&str]) -> AskResult {
        AskResult {
            question: "What is the capital of France?".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            debate: outcome(replies),
            zero_shot: Some(ZeroShotOutcome::new(AnswerMode::Freeform, "Paris.")),
        }
    }

    #[test]
    fn test_format_ask_shows_agents_vote_and_zero_shot() {
        plain();
        let text = ConsoleFormatter::format_ask(&ask_result(&["Paris", "Paris"]));
        assert!(text.contains("What is the capital of France?"));
        assert!(text.contains("── Agent 1 ──"));
        assert!(text.contains("── Agent 2 ──"));
        assert!(text.contains("unanimous"));
        assert!(text.contains("Zero-Shot Answer"));
        assert!(text.contains("Paris."));
    }

    #[test]
    fn test_format_ask_split_vote() {
        plain();
        let text = ConsoleFormatter::format_ask(&ask_result(&["Paris", "Lyon", "Paris"]));
        assert!(text.contains("2/3 agents agree"));
    }

    #[test]
    fn test_format_ask_blank_replies_still_vote() {
        plain();
        let result = ask_result(&["  ", "", "Paris"]);
        assert_eq!(result.debate.vote.as_ref().unwrap().count, 2);
        let text = ConsoleFormatter::format_ask(&result);
        assert!(text.contains("2/3 agents agree"));
        assert!(!text.contains("No valid responses from agents."));
    }

    #[test]
    fn test_format_ask_failed_vote() {
        plain();
        let mut result = ask_result(&["Paris"]);
        result.debate.vote = Err(VoteError::NoValidResponses);
        result.debate.answers[0].answer = None;
        let text = ConsoleFormatter::format_ask(&result);
        assert!(text.contains("No valid responses from agents."));
        assert!(text.contains("unparseable"));
    }

    #[test]
    fn test_statistics_line() {
        plain();
        let line = ConsoleFormatter::statistics_line(&RunStatistics::from_scores(&[1, 1, 0, 0], 1));
        assert!(line.contains("0.500 ± 0.250"));
        assert!(line.contains("2/4 correct"));
        assert!(line.contains("1 skipped"));
    }

    #[test]
    fn test_statistics_line_undefined() {
        plain();
        let line = ConsoleFormatter::statistics_line(&RunStatistics::from_scores(&[], 3));
        assert!(line.contains("undefined"));
        assert!(line.contains("3 skipped"));
    }

    fn comparison() -> ComparisonReport {
        let problem = ArithmeticProblem::new([1, 2, 3, 4, 5, 6]);
        let truth = problem.ground_truth();
        let debate = EvaluationReport::from_trials(vec![
            EvaluationTrial::from_vote(
                0,
                problem,
                vec![Some(AnswerValue::Number(truth as f64)); 2],
                Ok(AnswerValue::Number(truth as f64)),
            ),
            EvaluationTrial::from_vote(1, problem, vec![None, None], Err(VoteError::NoValidResponses)),
        ]);
        let zero_shot = EvaluationReport::from_trials(vec![EvaluationTrial::from_single_answer(
            0,
            problem,
            Some(AnswerValue::Number(0.0)),
        )]);
        let now = Utc::now();
        ComparisonReport {
            model: "gpt-3.5-turbo".to_string(),
            debate_settings: DebateSettings::default(),
            evaluation_settings: EvaluationSettings::default().with_seed(42),
            debate,
            zero_shot: Some(zero_shot),
            started_at: now,
            finished_at: now,
        }
    }

    #[test]
    fn test_format_evaluation() {
        plain();
        let text = ConsoleFormatter::format_evaluation(&comparison());
        assert!(text.contains("1+2*3+4-5*6"));
        assert!(text.contains("seed 42"));
        assert!(text.contains("correct"));
        assert!(text.contains("skipped"));
        assert!(text.contains("wrong"));
        assert!(text.contains("Multi-Agent Debate"));
        assert!(text.contains("Zero-Shot"));
    }

    #[test]
    fn test_format_json_is_parseable() {
        let json = ConsoleFormatter::format_json(&comparison());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["debate"]["trials"][1]["score"]["status"], "skipped");
    }
}
