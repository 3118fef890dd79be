//! Error types for reference config loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading the reference config.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Config file not found.
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the config file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a valid config document.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StandardsError {
    /// Root cause without the path prefix, for messages that already name the file.
    pub fn cause(&self) -> String {
        match self {
            Self::FileNotFound { .. } => "file not found".to_string(),
            Self::FileRead { source, .. } => source.to_string(),
            Self::Parse { source, .. } => source.to_string(),
        }
    }
}

/// Result type for config loading operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
