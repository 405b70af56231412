use std::path::PathBuf;

use pats_common::error::CursorError;
use thiserror::Error;

/// Errors that stop the filter.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("internal error while folding: {0}")]
    Fold(#[from] CursorError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FilterError {
    /// Process exit code: 2 for internal errors, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            FilterError::Fold(_) => 2,
            _ => 1,
        }
    }
}
