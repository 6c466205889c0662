//! MCP (Model Context Protocol) connection registry domain types.
//!
//! These types describe which tool servers the agent should connect to,
//! independent of how they are stored or delivered to the agent.
//!
//! # Design
//!
//! - `ConnectionDescriptor` - Tagged union over transport (stdio or SSE)
//! - `ConnectionDraft` - Raw form fields that build a descriptor
//! - `McpRegistry` - Name to descriptor mapping, also the snapshot format
//! - `RegistryStats` - Per-transport counts, derived on read
//! - `ExampleCatalog` - Read-only example registries for one-click adoption

mod examples;
mod registry;
mod types;

pub use examples::{BuiltinExamples, ExampleCatalog, ExampleConfig, default_agent_config};
pub use registry::{
    ConnectionWarning, ExampleLoad, McpRegistry, RegistryStats, WarningKind,
};
pub use types::{ConnectionDescriptor, ConnectionDraft, TransportKind, split_args};
