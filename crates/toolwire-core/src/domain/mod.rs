//! Domain types for the connection registry and agent selection.
//!
//! Pure data and rules only: no storage, HTTP, or terminal concerns.

pub mod agent;
pub mod mcp;

pub use agent::ActiveAgent;
pub use mcp::{
    BuiltinExamples, ConnectionDescriptor, ConnectionDraft, ConnectionWarning, ExampleCatalog,
    ExampleConfig, ExampleLoad, McpRegistry, RegistryStats, TransportKind, WarningKind,
    default_agent_config, split_args,
};
