//! Error types for the repository update flow

use thiserror::Error;

/// Repository update errors
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Scratch directory already exists: {path}")]
    ScratchExists { path: String },

    #[error("No packages requested for {target}")]
    EmptyPackageSet { target: String },

    #[error("{tool} exited with {status}: {stderr}")]
    CommandFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("Tool not found: {tool} - {message}")]
    ToolNotFound { tool: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for repository update operations
pub type Result<T> = std::result::Result<T, RepoError>;
