//! Layered configuration
//!
//! Later layers override earlier ones:
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. `DNDROLL_*` environment variables (e.g. `DNDROLL_DEFAULT_ROLL=2d6`)
//!
//! Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "DNDROLL_";

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] figment::Error),
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notation rolled with statistics when no command is given
    pub default_roll: String,
    /// How many ability scores to generate
    pub ability_scores: usize,
    /// Seed for reproducible rolls; fresh randomness when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Print JSON instead of text
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_roll: "1d20".to_string(),
            ability_scores: 6,
            seed: None,
            json: false,
        }
    }
}

impl Config {
    /// Load defaults, then `file` if given, then the environment
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = file {
            if !path.exists() {
                return Err(ConfigError::Missing(path.to_path_buf()));
            }
            debug!("loading config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        let config: Config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }
}
