use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How root moves are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Alpha-beta minimax, `difficulty` plies deep.
    #[default]
    Minimax,
    /// Static evaluation one ply ahead; `difficulty` narrows the random pool.
    Heuristic,
}

/// Opponent settings, loadable from a flat TOML table:
///
/// ```toml
/// difficulty = 3
/// mode = "minimax"
/// randomize = false
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub difficulty: u8,
    pub mode: SearchMode,
    /// Break ties (minimax) or pick from the top moves (heuristic) at random.
    pub randomize: bool,
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            difficulty: 3,
            mode: SearchMode::Minimax,
            randomize: false,
            seed: 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid search config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SearchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
