use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid match config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid report: {0}")]
    Report(#[from] serde_json::Error),
}

impl TournamentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TournamentError::Io {
            path: path.into(),
            source,
        }
    }
}
