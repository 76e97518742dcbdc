//! Match configuration, loadable from TOML

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies after which an unfinished game is scored as a draw
    pub max_plies: u32,
    /// Base seed for the engines' random sources (None = OS entropy)
    pub seed: Option<u64>,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 200,
            seed: None,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Parse a config from TOML text. Missing keys take their default.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}
