use std::io;
use thiserror::Error;

/// Custom error type for the taskbar library
#[derive(Error, Debug)]
pub enum TaskbarError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid update: {0}")]
    InvalidUpdate(String),

    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Command error: {0}")]
    Command(String),
}

/// Result type alias for the taskbar library
pub type Result<T> = std::result::Result<T, TaskbarError>;

impl TaskbarError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TaskbarError::Config(msg.into())
    }

    /// Create an invalid update error
    pub fn invalid_update<S: Into<String>>(msg: S) -> Self {
        TaskbarError::InvalidUpdate(msg.into())
    }

    pub fn unknown_key<S: Into<String>>(msg: S) -> Self {
        TaskbarError::UnknownKey(msg.into())
    }

    pub fn command<S: Into<String>>(msg: S) -> Self {
        TaskbarError::Command(msg.into())
    }
}
