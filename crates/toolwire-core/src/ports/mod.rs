//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Repositories load and save whole snapshots
//! - The agent channel is write-only from the registry's point of view

pub mod agent_state;
pub mod mcp_config_error;
pub mod mcp_config_repository;

use thiserror::Error;

pub use agent_state::{AgentStateError, AgentStatePort, NoopAgentState};
pub use mcp_config_error::McpConfigError;
pub use mcp_config_repository::{MCP_CONFIG_KEY, McpConfigRepository};

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
