//! CLI error types with exit code handling
//!
//! "configuration invalid" and "check cycle failed" exit differently so that
//! schedulers and wrapper scripts can tell them apart.

use miette::Diagnostic;
use thiserror::Error;

use aptwatch_repo::RepoError;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Configuration missing, unreadable, or incomplete
    #[error("Configuration error: {message}")]
    #[diagnostic(code(aptwatch::cli::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A check cycle failed (fetch, cache, or notification)
    #[error("Check failed: {message}")]
    #[diagnostic(code(aptwatch::cli::check))]
    Check { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config { .. } => exit_codes::CONFIG_ERROR,
            CliError::Check { .. } => exit_codes::CHECK_ERROR,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: None,
        }
    }

    /// Create a check-cycle error
    pub fn check(message: impl Into<String>) -> Self {
        Self::Check {
            message: message.into(),
        }
    }
}

impl From<RepoError> for CliError {
    fn from(err: RepoError) -> Self {
        if err.is_config() {
            Self::Config {
                message: err.to_string(),
                help: Some("Check the configuration file against the expected schema".to_string()),
            }
        } else {
            Self::check(err.to_string())
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
