//! Configuration for Scenarist.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{ScenaristError, ScenaristResult};

/// Main configuration for Scenarist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Scenario registry settings.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Memoizing evaluator settings.
    #[serde(default)]
    pub memo: MemoConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Scenario registry settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryConfig {
    /// What to do when a new name carries the same step set as an
    /// existing scenario.
    #[serde(default)]
    pub equivalence_policy: EquivalencePolicy,
}

/// Policy for equivalent scenarios registered under different names.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EquivalencePolicy {
    /// Store the new scenario and report the equivalent names.
    #[default]
    Allow,
    /// Refuse the new scenario.
    Reject,
}

impl std::fmt::Display for EquivalencePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EquivalencePolicy::Allow => write!(f, "allow"),
            EquivalencePolicy::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for EquivalencePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "allow" => Ok(EquivalencePolicy::Allow),
            "reject" => Ok(EquivalencePolicy::Reject),
            other => Err(format!("unknown equivalence policy '{}'", other)),
        }
    }
}

/// Memoizing evaluator settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoConfig {
    /// Maximum number of cached entries (0 = unbounded).
    #[serde(default)]
    pub capacity: usize,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> ScenaristResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that serde cannot restrict.
    pub fn validate(&self) -> ScenaristResult<()> {
        if !matches!(self.general.log_format.as_str(), "text" | "json") {
            return Err(ScenaristError::config(format!(
                "log_format must be 'text' or 'json', got '{}'",
                self.general.log_format
            )));
        }
        Ok(())
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ScenaristResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            registry: RegistryConfig::default(),
            memo: MemoConfig::default(),
        }
    }

    /// Loads configuration from `path`, or uses default if the file does not exist.
    ///
    /// An existing but invalid file is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> ScenaristResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default_config())
        }
    }
}
