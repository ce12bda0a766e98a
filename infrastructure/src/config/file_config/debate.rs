//! Debate and evaluation settings from TOML (`[debate]`, `[evaluation]`)

use debate_domain::debate::settings::{DEFAULT_AGENTS, DEFAULT_ROUNDS};
use debate_domain::evaluation::settings::DEFAULT_TRIALS;
use debate_domain::{DebateSettings, DomainError, EvaluationSettings, PeerVisibility};
use serde::{Deserialize, Serialize};

/// Raw `[debate]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    pub agents: usize,
    pub rounds: usize,
    /// "sequential" or "round-snapshot"
    pub peer_visibility: String,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            agents: DEFAULT_AGENTS,
            rounds: DEFAULT_ROUNDS,
            peer_visibility: "sequential".to_string(),
        }
    }
}

impl FileDebateConfig {
    /// Unknown visibility strings fall back to the default with a warning.
    pub fn parse_peer_visibility(&self) -> PeerVisibility {
        self.peer_visibility.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "debate.peer_visibility: unknown value '{}', falling back to 'sequential'",
                self.peer_visibility
            );
            PeerVisibility::default()
        })
    }

    pub fn to_settings(&self) -> Result<DebateSettings, DomainError> {
        Ok(DebateSettings::new(self.agents, self.rounds)?
            .with_peer_visibility(self.parse_peer_visibility()))
    }
}

/// Raw `[evaluation]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEvaluationConfig {
    pub trials: usize,
    pub seed: Option<u64>,
    pub concurrency: usize,
    /// Run the zero-shot baseline alongside the debate
    pub zero_shot: bool,
}

impl Default for FileEvaluationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            concurrency: 1,
            zero_shot: true,
        }
    }
}

impl FileEvaluationConfig {
    pub fn to_settings(&self) -> Result<EvaluationSettings, DomainError> {
        let settings = EvaluationSettings::new(self.trials)?.with_concurrency(self.concurrency);
        Ok(match self.seed {
            Some(seed) => settings.with_seed(seed),
            None => settings,
        })
    }
}
