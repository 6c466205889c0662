//! MCP configuration service error types.

use thiserror::Error;

use super::RepositoryError;

/// Errors from registry persistence.
///
/// Only `Persistence` ever reaches a caller; hydration failures are logged
/// and replaced by an empty registry.
#[derive(Debug, Error)]
pub enum McpConfigError {
    /// Stored snapshot could not be read or parsed.
    #[error("Failed to load MCP configuration")]
    Hydration(#[source] RepositoryError),

    /// Durable write failed; the in-memory registry is unchanged.
    #[error("Failed to save MCP configuration")]
    Persistence(#[source] RepositoryError),
}
