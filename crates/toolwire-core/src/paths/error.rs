//! Errors from locating or creating toolwire's data directory.

use std::path::PathBuf;
use thiserror::Error;

/// Why a toolwire path could not be resolved.
#[derive(Debug, Error)]
pub enum PathError {
    /// `~` was used but there is no home directory.
    #[error("No home directory to expand '~' against")]
    NoHomeDir,

    /// The platform reports no local data directory.
    #[error("No platform data directory; set TOOLWIRE_DATA_DIR")]
    NoDataDir,

    /// The data directory does not exist and could not be created.
    #[error("Could not create data directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// A path override was set but blank.
    #[error("Path override is blank")]
    EmptyPath,

    /// A relative path could not be anchored to the working directory.
    #[error("Working directory unavailable: {0}")]
    NoWorkingDir(String),
}
