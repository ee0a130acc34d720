//! Error types for cmpy

use std::path::PathBuf;
use thiserror::Error;

/// Error types for cmpy operations
#[derive(Debug, Error)]
pub enum CmpyError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration (input count, buffer size)
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input could not be opened for binary reading
    #[error("Cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The `stdin` identity appeared more than once in a single input list
    #[error("Standard input can only be compared once per run")]
    StdinAlreadyBound,

    /// The verdict report could not be serialized
    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

impl CmpyError {
    /// Check if this error was caught before any I/O happened
    pub fn is_config_error(&self) -> bool {
        matches!(self, CmpyError::Config(_))
    }

    /// Check if this error came from acquiring an input resource
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            CmpyError::Open { .. } | CmpyError::StdinAlreadyBound
        )
    }
}
