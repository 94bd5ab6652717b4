//! Evaluator configuration.

use crate::board::BoardPolicy;
use crate::error::ConfigError;
use crate::rules::WinRule;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings that change how boards are read and judged.
///
/// ```toml
/// policy = "strict"
/// win_rule = "contains"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Handling of malformed board strings.
    policy: BoardPolicy,

    /// Comparison used against the winning patterns.
    win_rule: WinRule,
}

impl EvaluatorConfig {
    /// Creates a configuration.
    pub fn new(policy: BoardPolicy, win_rule: WinRule) -> Self {
        Self { policy, win_rule }
    }

    /// Returns a copy with the given policy.
    pub fn with_policy(self, policy: BoardPolicy) -> Self {
        Self { policy, ..self }
    }

    /// Returns a copy with the given win rule.
    pub fn with_win_rule(self, win_rule: WinRule) -> Self {
        Self { win_rule, ..self }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(policy = ?config.policy, rule = ?config.win_rule, "Config loaded successfully");
        Ok(config)
    }
}
