//! Error type shared by the loaders.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    ConfigWrite(#[from] ron::Error),

    #[error("invalid tilemap json: {0}")]
    TilemapJson(#[from] serde_json::Error),

    #[error("layer {layer} is malformed: {reason}")]
    InvalidLayer { layer: usize, reason: String },
}

impl GameError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GameError::Io {
            path: path.into(),
            source,
        }
    }
}
