//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use debate_domain::PeerVisibility;
use std::path::PathBuf;

/// Output format for debate results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored when the terminal allows it
    Text,
    /// Pretty-printed JSON including full transcripts
    Json,
}

/// Peer visibility as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeerVisibilityArg {
    /// Later agents see earlier agents' reply from the same round
    Sequential,
    /// Every agent sees the state at the start of the round
    RoundSnapshot,
}

impl From<PeerVisibilityArg> for PeerVisibility {
    fn from(arg: PeerVisibilityArg) -> Self {
        match arg {
            PeerVisibilityArg::Sequential => PeerVisibility::Sequential,
            PeerVisibilityArg::RoundSnapshot => PeerVisibility::RoundSnapshot,
        }
    }
}

/// CLI arguments for agent-debate
#[derive(Parser, Debug)]
#[command(name = "agent-debate")]
#[command(author, version, about = "Multi-agent debate - several LLM agents argue towards a majority answer")]
#[command(long_about = r#"
Agent Debate improves LLM answers by letting several agents debate.

Every agent answers the question independently, then revises its answer
after reading the other agents' latest responses, for a fixed number of
rounds. The final answers are combined by majority vote.

Commands:
  ask       Debate an open-ended question and compare with a single zero-shot answer
  evaluate  Score debate vs. zero-shot accuracy on random arithmetic problems

Configuration files are loaded from (in priority order):
1. DEBATE_* environment variables (e.g. DEBATE_DEBATE__AGENTS=4)
2. --config <path>     Explicit config file
3. ./debate.toml       Project-level config
4. ~/.config/agent-debate/config.toml   Global config

Example:
  agent-debate ask "How many r's are in strawberry?" --agents 3
  agent-debate evaluate --agents 3 --rounds 2 --trials 20 --seed 7
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// How agents see their peers within a round
    #[arg(long, value_enum, global = true)]
    pub peer_visibility: Option<PeerVisibilityArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Debate a free-text question
    Ask(AskArgs),
    /// Compare debate and zero-shot accuracy on arithmetic problems
    Evaluate(EvaluateArgs),
}

/// Flags shared by both commands
#[derive(Args, Debug, Clone, Default)]
pub struct DebateArgs {
    /// Number of agents (1-10)
    #[arg(short, long, value_name = "N")]
    pub agents: Option<usize>,

    /// Number of rounds (1-10)
    #[arg(short, long, value_name = "R")]
    pub rounds: Option<usize>,

    /// Skip the zero-shot baseline
    #[arg(long)]
    pub no_zero_shot: bool,
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to debate
    pub question: String,

    #[command(flatten)]
    pub debate: DebateArgs,
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub debate: DebateArgs,

    /// Number of trials (10-100)
    #[arg(short, long, value_name = "T")]
    pub trials: Option<usize>,

    /// Seed for reproducible problems
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Trials to run at the same time
    #[arg(short, long, value_name = "C")]
    pub concurrency: Option<usize>,
}
