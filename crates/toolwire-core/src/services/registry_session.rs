//! An interactive editing session over the registry.
//!
//! Holds the in-memory registry for one user, tracks whether it has changed
//! since the last successful save, and routes persistence through
//! [`McpConfigService`].

use std::sync::Arc;

use super::McpConfigService;
use crate::domain::{
    ConnectionDescriptor, ConnectionDraft, ExampleLoad, McpRegistry, RegistryStats,
};
use crate::ports::McpConfigError;

/// Single-writer editing session.
pub struct RegistrySession {
    service: Arc<McpConfigService>,
    registry: McpRegistry,
    dirty: bool,
}

impl RegistrySession {
    /// Open a session: hydrate from storage and publish once.
    pub async fn open(service: Arc<McpConfigService>) -> Self {
        let registry = service.open().await;
        Self {
            service,
            registry,
            dirty: false,
        }
    }

    /// Current in-memory registry.
    pub const fn registry(&self) -> &McpRegistry {
        &self.registry
    }

    /// Whether there are changes not yet saved.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Per-transport counts.
    pub fn stats(&self) -> RegistryStats {
        self.registry.stats()
    }

    /// Insert or replace a connection. Blank names are ignored.
    pub fn add(&mut self, name: &str, descriptor: ConnectionDescriptor) -> bool {
        let added = self.registry.add(name, descriptor);
        self.dirty |= added;
        added
    }

    /// Insert or replace a connection built from raw form fields.
    pub fn add_draft(&mut self, name: &str, draft: &ConnectionDraft) -> bool {
        self.add(name, draft.to_descriptor())
    }

    /// Remove a connection if present.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.registry.remove(name);
        self.dirty |= removed;
        removed
    }

    /// Whether adopting an example needs a merge/replace decision first.
    pub fn needs_load_choice(&self) -> bool {
        self.registry.needs_load_choice()
    }

    /// Adopt an example or imported registry.
    pub fn load_example(&mut self, example: &McpRegistry, mode: ExampleLoad) {
        let before = self.registry.clone();
        self.registry.load_example(example, mode);
        self.dirty |= self.registry != before;
    }

    /// Save to storage and push to the agent.
    ///
    /// On failure the in-memory registry is kept and stays dirty.
    pub async fn save(&mut self) -> Result<usize, McpConfigError> {
        let count = self.service.save(&self.registry).await?;
        self.dirty = false;
        Ok(count)
    }

    /// Push the in-memory registry to the agent without saving.
    pub async fn publish(&self) {
        self.service.publish(&self.registry).await;
    }

    /// Where published state goes.
    pub fn agent_target(&self) -> String {
        self.service.agent_target()
    }
}
