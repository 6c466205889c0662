//! `SQLite` implementation of the `McpConfigRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use toolwire_core::{MCP_CONFIG_KEY, McpConfigRepository, McpRegistry, RepositoryError};

use crate::setup::create_schema;

/// `SQLite` implementation of the `McpConfigRepository` trait.
///
/// Stores the registry snapshot as a JSON blob in the `config_kv` table
/// under the fixed key `mcp_config`. The pool may be lazy; the table is
/// created on each access, so an unusable database file shows up as
/// `RepositoryError::Storage` from `load` or `save`.
pub struct SqliteMcpConfigRepository {
    pool: SqlitePool,
}

impl SqliteMcpConfigRepository {
    /// Create a new `SQLite` MCP configuration repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        create_schema(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))
    }
}

#[async_trait]
impl McpConfigRepository for SqliteMcpConfigRepository {
    async fn load(&self) -> Result<McpRegistry, RepositoryError> {
        self.ensure_schema().await?;
        let row = sqlx::query("SELECT value FROM config_kv WHERE key = ?")
            .bind(MCP_CONFIG_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        match row {
            Some(r) => {
                let json: String = r.get("value");
                serde_json::from_str(&json)
                    .map_err(|e| RepositoryError::Serialization(e.to_string()))
            }
            None => Ok(McpRegistry::new()),
        }
    }

    async fn save(&self, registry: &McpRegistry) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(registry)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.ensure_schema().await?;

        sqlx::query("INSERT OR REPLACE INTO config_kv (key, value, updated_at) VALUES (?, ?, ?)")
            .bind(MCP_CONFIG_KEY)
            .bind(&json)
            .bind(&updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(())
    }
}
