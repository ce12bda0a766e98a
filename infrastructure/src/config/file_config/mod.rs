//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section uses `#[serde(default)]`, so a partial file only overrides
//! the keys it names.

mod debate;
mod output;
mod providers;
mod retry;

pub use debate::{FileDebateConfig, FileEvaluationConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use providers::{FileOpenAiConfig, FileProvidersConfig};
pub use retry::FileRetryConfig;

use crate::openai::gateway::OpenAiGatewayConfig;
use debate_domain::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("no API key found: set {env_var} or providers.openai.api_key")]
    MissingApiKey { env_var: String },

    #[error("providers.openai.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("providers.openai.model cannot be empty")]
    EmptyModelName,

    #[error(transparent)]
    InvalidSettings(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub debate: FileDebateConfig,
    pub evaluation: FileEvaluationConfig,
    pub retry: FileRetryConfig,
    pub providers: FileProvidersConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Check the values that cannot be represented as domain settings.
    ///
    /// Debate and evaluation ranges are checked when the settings are built.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let openai = &self.providers.openai;
        if openai.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if openai.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }

    /// Resolve the API key from the process environment.
    pub fn resolve_api_key(&self) -> Result<String, ConfigValidationError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using `lookup` for environment access.
    ///
    /// The configured key wins over the environment variable; blank values
    /// count as missing.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<String, ConfigValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai = &self.providers.openai;
        openai
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| lookup(&openai.api_key_env).filter(|key| !key.trim().is_empty()))
            .ok_or_else(|| ConfigValidationError::MissingApiKey {
                env_var: openai.api_key_env.clone(),
            })
    }

    /// Build the gateway configuration around an already-resolved key.
    pub fn gateway_config(&self, api_key: String) -> OpenAiGatewayConfig {
        let openai = &self.providers.openai;
        OpenAiGatewayConfig {
            api_key,
            base_url: openai.base_url.clone(),
            model: openai.model.clone(),
            request_timeout: openai.timeout_seconds.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::PeerVisibility;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[debate]
agents = 3
rounds = 2
peer_visibility = "round-snapshot"

[evaluation]
trials = 50
seed = 42
concurrency = 4
zero_shot = false

[retry]
delay_seconds = 5
max_attempts = 10

[providers.openai]
api_key_env = "MY_KEY"
base_url = "http://localhost:8080"
model = "local-model"
timeout_seconds = 60

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let debate = config.debate.to_settings().unwrap();
        assert_eq!(debate.agents(), 3);
        assert_eq!(debate.rounds(), 2);
        assert_eq!(debate.peer_visibility(), PeerVisibility::RoundSnapshot);

        let evaluation = config.evaluation.to_settings().unwrap();
        assert_eq!(evaluation.trials(), 50);
        assert_eq!(evaluation.seed(), Some(42));
        assert_eq!(evaluation.concurrency(), 4);
        assert!(!config.evaluation.zero_shot);

        assert_eq!(config.retry.to_policy().max_attempts, Some(10));
        assert_eq!(config.providers.openai.api_key_env, "MY_KEY");
        assert_eq!(config.output.format, Some(FileOutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.debate.agents, 2);
        assert_eq!(config.debate.rounds, 3);
        assert_eq!(config.evaluation.trials, 20);
        assert!(config.evaluation.zero_shot);
        assert!(config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = FileConfig::default();
        config.providers.openai.timeout_seconds = Some(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = FileConfig::default();
        config.providers.openai.model = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName)
        ));
    }

    #[test]
    fn test_missing_api_key_is_error() {
        let config = FileConfig::default();
        let err = config.resolve_api_key_with(|_| None).unwrap_err();
        assert!(matches!(
            &err,
            ConfigValidationError::MissingApiKey { env_var } if env_var == "OPENAI_API_KEY"
        ));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_api_key_from_named_env_var() {
        let mut config = FileConfig::default();
        config.providers.openai.api_key_env = "CUSTOM_KEY".to_string();
        let key = config
            .resolve_api_key_with(|name| (name == "CUSTOM_KEY").then(|| "sk-env".to_string()))
            .unwrap();
        assert_eq!(key, "sk-env");
    }

    #[test]
    fn test_configured_api_key_wins() {
        let mut config = FileConfig::default();
        config.providers.openai.api_key = Some("sk-file".to_string());
        let key = config
            .resolve_api_key_with(|_| Some("sk-env".to_string()))
            .unwrap();
        assert_eq!(key, "sk-file");
    }

    #[test]
    fn test_blank_env_key_is_missing() {
        let config = FileConfig::default();
        assert!(config.resolve_api_key_with(|_| Some("  ".to_string())).is_err());
    }

    #[test]
    fn test_gateway_config() {
        let mut config = FileConfig::default();
        config.providers.openai.timeout_seconds = Some(30);
        let gateway = config.gateway_config("sk-test".to_string());
        assert_eq!(gateway.model, "gpt-3.5-turbo");
        assert_eq!(gateway.base_url, "https://api.openai.com");
        assert_eq!(gateway.request_timeout, Some(Duration::from_secs(30)));
    }
}
