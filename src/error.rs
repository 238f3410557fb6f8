//! Error types for bufdiff operations

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BufdiffError>;

#[derive(Error, Debug)]
pub enum BufdiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed document '{path}': {cause}")]
    MalformedDocument { path: PathBuf, cause: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl BufdiffError {
    pub fn malformed_document(path: impl Into<PathBuf>, cause: impl ToString) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            cause: cause.to_string(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }
}
