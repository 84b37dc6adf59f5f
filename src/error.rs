use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside of gameplay: startup, configuration and persistence.
///
/// Gameplay transitions themselves are total and never produce an error.
#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed score file {}: {source}", path.display())]
    ScoreFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("failed to install logger: {0}")]
    Logging(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SnakeError>;
