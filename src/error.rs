//! Application-level error types.
//!
//! This module defines the errors surfaced by the CLI, with recovery
//! suggestions printed after the error message.

use crate::bundler;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bundler errors
    #[error("{0}")]
    Bundler(#[from] bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::Bundler(bundler::Error::ToolMissing { install_hint, .. }) => vec![
                format!("Install it with: {}", install_hint),
                "Or rerun with --install-missing to install it automatically".to_string(),
                "Or point [tools] in colornote.toml at an existing executable".to_string(),
            ],
            Self::Bundler(bundler::Error::MissingInput { .. }) => vec![
                "Run from the project root or pass --project-dir".to_string(),
                "Check main_script in colornote.toml".to_string(),
            ],
            Self::Bundler(bundler::Error::CommandStatus { .. }) => vec![
                "Check the packager output above for the first error".to_string(),
                "Run `colornote_bundler clean` and retry if a stale build is suspected".to_string(),
            ],
            Self::Bundler(bundler::Error::UnsupportedHost(_)) => vec![
                "Select a target explicitly: --windows, --macos, --linux, --android or --all"
                    .to_string(),
            ],
            Self::Toml(_) => vec!["Fix the syntax error in the manifest".to_string()],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
