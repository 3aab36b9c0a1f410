//! Configuration System
//!
//! Loads the network layout and run parameters from a TOML file so scenarios
//! can change without recompiling.

use serde::{Deserialize, Serialize};
use share_events::AgentRole;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::network::network_defaults;
use crate::strategy::{ProducerActStrategy, ProducerPayoff};

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "network.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub users: Vec<UserConfig>,
}

/// Run parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub iterations: u64,
    /// Documents returned by each top-k query
    pub k_results: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            k_results: network_defaults::K_RESULTS,
            seed: network_defaults::SEED,
        }
    }
}

/// One agent in the network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    pub name: String,
    pub taste: String,
    #[serde(default = "default_role")]
    pub role: AgentRole,
    /// Unregistered agents are stored but skipped every iteration
    #[serde(default = "default_registered")]
    pub registered: bool,
    /// Producers only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub act_strategy: Option<ProducerActStrategy>,
    /// Producers only
    #[serde(default)]
    pub payoff: ProducerPayoff,
}

fn default_role() -> AgentRole {
    AgentRole::Consumer
}

fn default_registered() -> bool {
    true
}

impl UserConfig {
    pub fn producer(name: impl Into<String>, taste: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            taste: taste.into(),
            role: AgentRole::Producer,
            registered: true,
            act_strategy: None,
            payoff: ProducerPayoff::Default,
        }
    }

    pub fn consumer(name: impl Into<String>, taste: impl Into<String>) -> Self {
        Self {
            role: AgentRole::Consumer,
            ..Self::producer(name, taste)
        }
    }

    pub fn with_act_strategy(mut self, strategy: ProducerActStrategy) -> Self {
        self.act_strategy = Some(strategy);
        self
    }

    pub fn with_payoff(mut self, payoff: ProducerPayoff) -> Self {
        self.payoff = payoff;
        self
    }

    pub fn unregistered(mut self) -> Self {
        self.registered = false;
        self
    }
}

impl SimConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", DEFAULT_CONFIG_PATH, e);
            Self::default()
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.k_results == 0 {
            return Err(ConfigError::Invalid(
                "simulation.k_results must be at least 1".to_string(),
            ));
        }
        for (i, user) in self.users.iter().enumerate() {
            if user.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("users[{}] has an empty name", i)));
            }
            if user.taste.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "user '{}' has an empty taste",
                    user.name
                )));
            }
            if user.role == AgentRole::Consumer && user.act_strategy.is_some() {
                return Err(ConfigError::Invalid(format!(
                    "consumer '{}' cannot have an act strategy",
                    user.name
                )));
            }
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            users: vec![
                UserConfig::producer("Ava", "sports"),
                UserConfig::producer("Ben", "music")
                    .with_act_strategy(ProducerActStrategy::LikeSimilarDocuments),
                UserConfig::producer("Cleo", "sports")
                    .with_act_strategy(ProducerActStrategy::FollowSimilarProducers),
                UserConfig::consumer("Dev", "sports"),
                UserConfig::consumer("Eli", "music"),
                UserConfig::consumer("Fay", "movies"),
            ],
        }
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
