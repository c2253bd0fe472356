//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types with
//! [`FileConfig::to_round_config`].
//!
//! Example configuration:
//!
//! ```toml
//! [tools]
//! dynamic_capacity = 10
//!
//! [round]
//! max_research_cycles = 10
//! max_answer_retries = 1
//! max_model_retries = 2
//! retry_backoff_ms = 500
//! structured_output = false
//!
//! [logging]
//! event_log = "~/.local/state/agent-orchestra/events.jsonl"
//! ```

use orchestra_application::RoundConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("tools.dynamic_capacity cannot be 0")]
    ZeroDynamicCapacity,

    #[error("round.max_research_cycles cannot be 0")]
    ZeroResearchCycles,
}

/// Raw tool registry configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolsConfig {
    /// Maximum number of dynamically loaded tools kept at once
    pub dynamic_capacity: usize,
}

impl Default for FileToolsConfig {
    fn default() -> Self {
        Self {
            dynamic_capacity: RoundConfig::default().dynamic_tool_capacity,
        }
    }
}

/// Raw round loop configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoundConfig {
    pub max_research_cycles: usize,
    pub max_answer_retries: usize,
    pub max_model_retries: usize,
    /// Pause before each model retry, in milliseconds
    pub retry_backoff_ms: u64,
    pub structured_output: bool,
}

impl Default for FileRoundConfig {
    fn default() -> Self {
        let defaults = RoundConfig::default();
        Self {
            max_research_cycles: defaults.max_research_cycles,
            max_answer_retries: defaults.max_answer_retries,
            max_model_retries: defaults.max_model_retries,
            retry_backoff_ms: defaults.retry_backoff.as_millis() as u64,
            structured_output: defaults.structured_output,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL event transcript path; disabled when unset
    pub event_log: Option<PathBuf>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Tool registry settings
    pub tools: FileToolsConfig,
    /// Round loop settings
    pub round: FileRoundConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.tools.dynamic_capacity == 0 {
            return Err(ConfigValidationError::ZeroDynamicCapacity);
        }

        if self.round.max_research_cycles == 0 {
            return Err(ConfigValidationError::ZeroResearchCycles);
        }

        Ok(())
    }

    /// Convert to the application's round parameters
    pub fn to_round_config(&self) -> RoundConfig {
        RoundConfig::default()
            .with_dynamic_tool_capacity(self.tools.dynamic_capacity)
            .with_max_research_cycles(self.round.max_research_cycles)
            .with_max_answer_retries(self.round.max_answer_retries)
            .with_max_model_retries(self.round.max_model_retries)
            .with_retry_backoff(Duration::from_millis(self.round.retry_backoff_ms))
            .with_structured_output(self.round.structured_output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[tools]
dynamic_capacity = 4

[round]
max_research_cycles = 6
max_answer_retries = 2
max_model_retries = 0
retry_backoff_ms = 250
structured_output = true

[logging]
event_log = "/tmp/events.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tools.dynamic_capacity, 4);
        assert_eq!(config.round.max_research_cycles, 6);
        assert_eq!(config.round.max_answer_retries, 2);
        assert_eq!(config.round.max_model_retries, 0);
        assert_eq!(config.round.retry_backoff_ms, 250);
        assert!(config.round.structured_output);
        assert_eq!(
            config.logging.event_log,
            Some(PathBuf::from("/tmp/events.jsonl"))
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[round]
max_research_cycles = 3
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.round.max_research_cycles, 3);
        // Defaults should apply
        assert_eq!(config.round.max_answer_retries, 1);
        assert_eq!(config.tools.dynamic_capacity, 10);
        assert!(config.logging.event_log.is_none());
    }

    #[test]
    fn test_defaults_match_round_config() {
        let config = FileConfig::default();
        assert_eq!(config.to_round_config(), RoundConfig::default());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_capacity() {
        let config: FileConfig = toml::from_str("[tools]\ndynamic_capacity = 0\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ZeroDynamicCapacity)
        );
    }

    #[test]
    fn test_validate_zero_cycles() {
        let config: FileConfig = toml::from_str("[round]\nmax_research_cycles = 0\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ZeroResearchCycles)
        );
    }

    #[test]
    fn test_to_round_config() {
        let mut config = FileConfig::default();
        config.tools.dynamic_capacity = 3;
        config.round.retry_backoff_ms = 0;
        config.round.structured_output = true;

        let round = config.to_round_config();
        assert_eq!(round.dynamic_tool_capacity, 3);
        assert_eq!(round.retry_backoff, Duration::ZERO);
        assert!(round.structured_output);
    }
}
