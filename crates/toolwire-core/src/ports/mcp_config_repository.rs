//! MCP configuration repository trait.
//!
//! This port defines durable storage for the connection registry snapshot.
//! Implementations handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::McpRegistry;

/// Fixed storage key the registry snapshot lives under.
pub const MCP_CONFIG_KEY: &str = "mcp_config";

/// Repository for the persisted connection registry.
///
/// The registry is stored and replaced as a whole; there is no per-entry API.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - `save()` is a full overwrite of the previous snapshot
/// - Missing data is not an error; it loads as an empty registry
#[async_trait]
pub trait McpConfigRepository: Send + Sync {
    /// Load the stored registry.
    ///
    /// Returns an empty registry if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// - `Storage` if the backend cannot be read
    /// - `Serialization` if the stored snapshot does not parse
    async fn load(&self) -> Result<McpRegistry, RepositoryError>;

    /// Replace the stored registry.
    ///
    /// # Errors
    ///
    /// - `Storage` if the write fails
    /// - `Serialization` if the registry cannot be encoded
    async fn save(&self, registry: &McpRegistry) -> Result<(), RepositoryError>;
}
