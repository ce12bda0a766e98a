//! CLI entrypoint for Agent Debate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use debate_application::{
    DebateProgressNotifier, NoProgress, RunAskInput, RunAskUseCase, RunEvaluationInput,
    RunEvaluationUseCase,
};
use debate_domain::{DebateSettings, Question};
use debate_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, OpenAiCompletionGateway,
};
use debate_presentation::{
    AskArgs, Cli, Command, ConsoleFormatter, DebateArgs, EvaluateArgs, OutputFormat,
    ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    let Some(command) = &cli.command else {
        bail!("No command given. Try `agent-debate ask \"<question>\"` or `agent-debate evaluate`.");
    };

    if !config.output.color {
        colored::control::set_override(false);
    }

    // The credential is resolved once; without it nothing can run
    let api_key = config.resolve_api_key()?;

    // === Dependency Injection ===
    let gateway = Arc::new(
        OpenAiCompletionGateway::new(config.gateway_config(api_key))
            .context("Failed to create completion gateway")?,
    );

    info!("Starting Agent Debate");

    let format = cli.output.unwrap_or(match config.output.format {
        Some(FileOutputFormat::Json) => OutputFormat::Json,
        Some(FileOutputFormat::Text) | None => OutputFormat::Text,
    });
    let progress = progress_notifier(!cli.quiet && config.output.progress);

    let output = match command {
        Command::Ask(args) => {
            run_ask(&cli, &config, args, gateway, format, progress.as_ref()).await?
        }
        Command::Evaluate(args) => {
            run_evaluate(&cli, &config, args, gateway, format, progress.as_ref()).await?
        }
    };

    println!("{}", output);

    Ok(())
}

async fn run_ask(
    cli: &Cli,
    config: &FileConfig,
    args: &AskArgs,
    gateway: Arc<OpenAiCompletionGateway>,
    format: OutputFormat,
    progress: &dyn DebateProgressNotifier,
) -> Result<String> {
    let question = Question::try_new(args.question.as_str())?;
    let mut input = RunAskInput::new(question, debate_settings(cli, config, &args.debate)?);
    if args.debate.no_zero_shot {
        input = input.without_zero_shot();
    }

    let use_case = RunAskUseCase::new(gateway).with_retry_policy(config.retry.to_policy());
    let result = use_case.execute_with_progress(input, progress).await?;

    Ok(match format {
        OutputFormat::Text => ConsoleFormatter::format_ask(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    })
}

async fn run_evaluate(
    cli: &Cli,
    config: &FileConfig,
    args: &EvaluateArgs,
    gateway: Arc<OpenAiCompletionGateway>,
    format: OutputFormat,
    progress: &dyn DebateProgressNotifier,
) -> Result<String> {
    let mut evaluation = config.evaluation.clone();
    if let Some(trials) = args.trials {
        evaluation.trials = trials;
    }
    if let Some(seed) = args.seed {
        evaluation.seed = Some(seed);
    }
    if let Some(concurrency) = args.concurrency {
        evaluation.concurrency = concurrency;
    }

    let mut input = RunEvaluationInput::new(
        debate_settings(cli, config, &args.debate)?,
        evaluation.to_settings()?,
    );
    if args.debate.no_zero_shot || !evaluation.zero_shot {
        input = input.without_zero_shot();
    }

    let use_case = RunEvaluationUseCase::new(gateway).with_retry_policy(config.retry.to_policy());
    let report = use_case.execute_with_progress(input, progress).await?;

    Ok(match format {
        OutputFormat::Text => ConsoleFormatter::format_evaluation(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    })
}

/// Command-line values override the configured ones
fn debate_settings(cli: &Cli, config: &FileConfig, args: &DebateArgs) -> Result<DebateSettings> {
    let mut debate = config.debate.clone();
    if let Some(agents) = args.agents {
        debate.agents = agents;
    }
    if let Some(rounds) = args.rounds {
        debate.rounds = rounds;
    }

    let settings = debate.to_settings()?;
    Ok(match cli.peer_visibility {
        Some(visibility) => settings.with_peer_visibility(visibility.into()),
        None => settings,
    })
}

fn progress_notifier(enabled: bool) -> Box<dyn DebateProgressNotifier> {
    if !enabled {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    }
}
