//! Match settings file.
//!
//! ```toml
//! [match]
//! num_games = 4
//! max_plies = 200
//!
//! [white]
//! difficulty = 3
//!
//! [black]
//! difficulty = 2
//! mode = "heuristic"
//! randomize = true
//! seed = 7
//! ```

use std::path::Path;

use classical_engine::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::error::TournamentError;
use crate::match_runner::MatchConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    #[serde(rename = "match")]
    pub match_config: MatchConfig,
    /// Opponent that takes white in the first game.
    pub white: SearchConfig,
    pub black: SearchConfig,
}

impl TournamentConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TournamentError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
