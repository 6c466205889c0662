//! MCP configuration service - hydrate, save, and publish the registry.
//!
//! Durable storage and the agent's state slot are two independent copies.
//! Only `save` writes both; `publish` touches the agent copy alone.

use std::sync::Arc;

use crate::domain::McpRegistry;
use crate::ports::{AgentStatePort, McpConfigError, McpConfigRepository};

/// Service coordinating registry storage and agent publication.
pub struct McpConfigService {
    repository: Arc<dyn McpConfigRepository>,
    agent: Arc<dyn AgentStatePort>,
}

impl McpConfigService {
    /// Create a new service with injected storage and agent channel.
    pub fn new(repository: Arc<dyn McpConfigRepository>, agent: Arc<dyn AgentStatePort>) -> Self {
        Self { repository, agent }
    }

    /// Read the stored registry.
    ///
    /// Never fails: unreadable or malformed storage yields an empty registry
    /// and a warning in the log.
    pub async fn hydrate(&self) -> McpRegistry {
        match self.repository.load().await {
            Ok(registry) => {
                tracing::debug!(count = registry.len(), "Hydrated MCP configuration");
                registry
            }
            Err(e) => {
                let err = McpConfigError::Hydration(e);
                tracing::warn!(
                    error = %err,
                    cause = ?std::error::Error::source(&err).map(ToString::to_string),
                    "Starting with empty MCP configuration"
                );
                McpRegistry::new()
            }
        }
    }

    /// Hydrate and publish the result once, so the agent has a view of the
    /// configuration before any explicit save.
    pub async fn open(&self) -> McpRegistry {
        let registry = self.hydrate().await;
        self.publish(&registry).await;
        registry
    }

    /// Persist `registry` and push it to the agent.
    ///
    /// Returns the number of connections saved. A failed durable write is
    /// returned as `Persistence` and nothing is pushed. A failed push after a
    /// successful write is only logged.
    pub async fn save(&self, registry: &McpRegistry) -> Result<usize, McpConfigError> {
        self.repository
            .save(registry)
            .await
            .map_err(McpConfigError::Persistence)?;

        tracing::info!(count = registry.len(), "Saved MCP configuration");
        self.publish(registry).await;
        Ok(registry.len())
    }

    /// Push `registry` to the agent without touching durable storage.
    ///
    /// Fire-and-forget: failures are logged, not retried.
    pub async fn publish(&self, registry: &McpRegistry) {
        match self.agent.set_mcp_config(registry).await {
            Ok(()) => tracing::debug!(
                count = registry.len(),
                agent = %self.agent.describe(),
                "Published MCP configuration to agent"
            ),
            Err(e) => tracing::warn!(
                agent = %self.agent.describe(),
                error = %e,
                "Failed to publish MCP configuration to agent"
            ),
        }
    }

    /// Where published state goes, for display.
    pub fn agent_target(&self) -> String {
        self.agent.describe()
    }
}
