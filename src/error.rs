//! Error type shared by the frequency counter and the shelter record store.
//!
//! Every fallible library operation returns `Result<T, AppError>`. Missing
//! input is always reported as [`AppError::EmptyInput`] and never reaches the
//! database.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Required input was absent or empty.
    #[error("nothing to {operation}: {what} is empty")]
    EmptyInput {
        operation: &'static str,
        what: &'static str,
    },

    /// Connection configuration is incomplete or malformed.
    #[error("database configuration invalid: {0}")]
    Config(String),

    /// Operation requires an open connection.
    #[error("not connected to the record store")]
    NotConnected,

    /// The connector was closed and cannot be reused.
    #[error("connection already closed")]
    ConnectionClosed,

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Input could not be turned into a BSON document.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

impl AppError {
    pub fn empty_input(operation: &'static str, what: &'static str) -> Self {
        Self::EmptyInput { operation, what }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument(message.into())
    }

    /// Returns true for errors caused by missing caller input.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }
}
