//! Game configuration

use std::path::Path;
use std::time::Duration;

use random_engine::SamplingMode;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

/// Tunables for pacing and opponent behavior.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay between the player's move and the opponent's reply
    pub opponent_delay_ms: u64,
    /// How long a hint stays visible
    pub hint_duration_ms: u64,
    /// Put the moved piece's `has_moved` flag back on undo. When false an
    /// undone pawn push still counts as moved and loses its double step.
    pub restore_has_moved_on_undo: bool,
    /// Seed for hint and opponent randomness (None = entropy)
    pub seed: Option<u64>,
    /// How the opponent resamples pieces that cannot move
    pub opponent_sampling: SamplingMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opponent_delay_ms: 1000,
            hint_duration_ms: 2000,
            restore_has_moved_on_undo: true,
            seed: None,
            opponent_sampling: SamplingMode::WithReplacement,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), ?config, "loaded game config");
        Ok(config)
    }

    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    pub fn hint_duration(&self) -> Duration {
        Duration::from_millis(self.hint_duration_ms)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
