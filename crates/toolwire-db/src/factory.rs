//! Composition utilities for building services with `SQLite` backends.
//!
//! This module is focused purely on construction and should not contain any
//! domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use toolwire_core::{AgentStatePort, McpConfigRepository, McpConfigService};

use crate::repositories::SqliteMcpConfigRepository;

/// Factory for creating repository and service instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Create the MCP configuration repository from a pool.
    pub fn mcp_config_repository(pool: SqlitePool) -> Arc<dyn McpConfigRepository> {
        Arc::new(SqliteMcpConfigRepository::new(pool))
    }

    /// Build the MCP configuration service over `SQLite` storage.
    ///
    /// ```ignore
    /// let pool = setup_database(&db_path).await?;
    /// let service = CoreFactory::build_mcp_config_service(pool, agent);
    /// ```
    pub fn build_mcp_config_service(
        pool: SqlitePool,
        agent: Arc<dyn AgentStatePort>,
    ) -> McpConfigService {
        McpConfigService::new(Self::mcp_config_repository(pool), agent)
    }
}
