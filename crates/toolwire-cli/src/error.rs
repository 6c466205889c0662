//! CLI-specific error types and mappings.
//!
//! Maps core failures to exit codes and user-facing messages.

use thiserror::Error;
use toolwire_core::{AgentStateError, McpConfigError};

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Durable storage error.
    #[error("Database error: {0}")]
    Database(String),

    /// The agent could not be reached or refused the update.
    #[error("Agent error: {0}")]
    Agent(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where a category fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
            Self::Agent(_) => 69,    // EX_UNAVAILABLE
        }
    }
}

impl From<McpConfigError> for CliError {
    fn from(err: McpConfigError) -> Self {
        match std::error::Error::source(&err) {
            Some(cause) => Self::Database(format!("{err}: {cause}")),
            None => Self::Database(err.to_string()),
        }
    }
}

impl From<AgentStateError> for CliError {
    fn from(err: AgentStateError) -> Self {
        Self::Agent(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error surfaced from a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
