//! Game errors

use rocks_engine::config::ConfigError;
use rocks_engine::StageError;
use thiserror::Error;

/// Failures surfaced by the rules layer
#[derive(Error, Debug)]
pub enum GameError {
    /// The stage registry rejected an operation
    #[error("Stage error: {0}")]
    Stage(#[from] StageError),

    /// Configuration could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;
