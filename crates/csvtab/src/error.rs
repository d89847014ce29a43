use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Options are unusable (blank delimiter, empty or blank line endings).
    #[error("invalid options: {message}")]
    Config { message: String },

    /// Raw input cannot be parsed at all (empty or whitespace-only).
    #[error("invalid input: {message}")]
    Input { message: String },

    #[error("syntax at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("column count mismatch: expected {expected}, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    pub(crate) fn input(message: impl Into<String>) -> Self {
        Error::Input {
            message: message.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
