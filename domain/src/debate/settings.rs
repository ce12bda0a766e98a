//! Debate settings

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed number of agents per debate
pub const AGENT_RANGE: RangeInclusive<usize> = 1..=10;
/// Allowed number of rounds per debate
pub const ROUND_RANGE: RangeInclusive<usize> = 1..=10;

pub const DEFAULT_AGENTS: usize = 2;
pub const DEFAULT_ROUNDS: usize = 3;

/// Which state of the other transcripts an agent sees within a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerVisibility {
    /// Agents answer one after another; a later agent sees the replies that
    /// earlier agents already gave in the same round.
    #[default]
    Sequential,
    /// Every agent sees the transcripts as they stood when the round began.
    RoundSnapshot,
}

impl PeerVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeerVisibility::Sequential => "sequential",
            PeerVisibility::RoundSnapshot => "round_snapshot",
        }
    }
}

impl std::fmt::Display for PeerVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PeerVisibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sequential" => Ok(PeerVisibility::Sequential),
            "round_snapshot" | "snapshot" => Ok(PeerVisibility::RoundSnapshot),
            other => Err(format!(
                "unknown peer visibility '{}' (expected sequential or round_snapshot)",
                other
            )),
        }
    }
}

/// Shape of one debate: how many agents, how many rounds (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDebateSettings")]
pub struct DebateSettings {
    agents: usize,
    rounds: usize,
    peer_visibility: PeerVisibility,
}

#[derive(Deserialize)]
struct RawDebateSettings {
    agents: usize,
    rounds: usize,
    #[serde(default)]
    peer_visibility: PeerVisibility,
}

impl TryFrom<RawDebateSettings> for DebateSettings {
    type Error = DomainError;

    fn try_from(raw: RawDebateSettings) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.agents, raw.rounds)?.with_peer_visibility(raw.peer_visibility))
    }
}

impl DebateSettings {
    /// Validate and build settings with sequential peer visibility
    pub fn new(agents: usize, rounds: usize) -> Result<Self, DomainError> {
        check_range("agents", agents, &AGENT_RANGE)?;
        check_range("rounds", rounds, &ROUND_RANGE)?;
        Ok(Self {
            agents,
            rounds,
            peer_visibility: PeerVisibility::default(),
        })
    }

    pub fn with_peer_visibility(mut self, peer_visibility: PeerVisibility) -> Self {
        self.peer_visibility = peer_visibility;
        self
    }

    pub fn agents(&self) -> usize {
        self.agents
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn peer_visibility(&self) -> PeerVisibility {
        self.peer_visibility
    }

    /// Completion calls one debate performs
    pub fn calls_per_debate(&self) -> usize {
        self.agents * self.rounds
    }
}

impl Default for DebateSettings {
    fn default() -> Self {
        Self {
            agents: DEFAULT_AGENTS,
            rounds: DEFAULT_ROUNDS,
            peer_visibility: PeerVisibility::default(),
        }
    }
}

pub(crate) fn check_range(
    field: &'static str,
    value: usize,
    range: &RangeInclusive<usize>,
) -> Result<(), DomainError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(DomainError::InvalidSettings {
            field,
            min: *range.start(),
            max: *range.end(),
            value,
        })
    }
}
