//! Core domain types, ports, and services for toolwire.
//!
//! toolwire keeps a named registry of MCP tool-server connections, persists
//! it, and hands it to an agent runtime through the agent's `mcp_config`
//! state slot. This crate holds everything that does not depend on a
//! concrete storage engine or HTTP client.
//!
//! # Layout
//!
//! - [`domain`] - connection descriptors, the registry, examples, agent choice
//! - [`ports`] - storage and agent-channel traits, error types
//! - [`services`] - hydrate/save/publish orchestration and editing sessions
//! - [`paths`] - data directory and database location

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    ActiveAgent, BuiltinExamples, ConnectionDescriptor, ConnectionDraft, ConnectionWarning,
    ExampleCatalog, ExampleConfig, ExampleLoad, McpRegistry, RegistryStats, TransportKind,
    WarningKind, default_agent_config,
};
pub use ports::{
    AgentStateError, AgentStatePort, MCP_CONFIG_KEY, McpConfigError, McpConfigRepository,
    NoopAgentState, RepositoryError,
};
pub use services::{McpConfigService, RegistrySession};
