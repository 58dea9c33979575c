use std::path::PathBuf;

/// Errors returned when a move cannot be placed. None of these change the
/// board, so the caller can always re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid column provided: '{0}' (expected A-G)")]
    InvalidColumn(String),

    #[error("Column {0} is full")]
    ColumnFull(char),

    #[error("Invalid Point ID provided: '{0}'")]
    InvalidPoint(String),

    #[error("Unavailable Point ID provided: {0}")]
    PointUnavailable(String),

    #[error("Inaccessible Point ID provided: {point} (next open point in column is {frontier})")]
    PointBlocked { point: String, frontier: String },

    #[error("Game is over")]
    GameOver,
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
