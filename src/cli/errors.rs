//! CLI-specific error types
//!
//! Every CLI error is fatal; main prints it and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Failed to create tokio runtime: {0}")]
    Runtime(std::io::Error),

    #[error("Server error: {0}")]
    Server(std::io::Error),
}
