//! CLI error types with exit code handling

use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CliError {
    /// Invalid user input (arguments or configuration file)
    #[error("{message}")]
    #[diagnostic(code(repoship::cli::input))]
    Input {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// An update step failed
    #[error("Release update failed: {message}")]
    #[diagnostic(code(repoship::cli::update))]
    Update { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Input { .. } => exit_codes::USAGE_ERROR,
            CliError::Update { .. } => exit_codes::ERROR,
        }
    }

    /// Create an input error (user provided invalid input)
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            help: None,
        }
    }

    /// Create an update error from a failing step
    pub fn update(message: impl Into<String>) -> Self {
        Self::Update {
            message: message.into(),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
