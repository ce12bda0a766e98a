//! Configuration file loading for agent-debate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DEBATE_`-prefixed environment variables (`DEBATE_DEBATE__AGENTS=4`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./debate.toml` or `./.debate.toml`
//! 4. Global: `$XDG_CONFIG_HOME/agent-debate/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDebateConfig, FileEvaluationConfig, FileOpenAiConfig,
    FileOutputConfig, FileOutputFormat, FileProvidersConfig, FileRetryConfig,
};
pub use loader::ConfigLoader;
