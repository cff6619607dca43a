use std::path::PathBuf;

use crate::board::Occupant;

/// Errors raised when a move cannot be placed on the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is already occupied by {occupant}")]
    IllegalMove {
        row: usize,
        col: usize,
        occupant: Occupant,
    },

    #[error("position ({row}, {col}) is outside of a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("no empty cells left to play")]
    NoMovesAvailable,
}

/// Errors that can end a game before a terminal outcome is reached.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("move error: {0}")]
    Move(#[from] MoveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before a move was entered")]
    InputClosed,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
