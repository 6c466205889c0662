//! Core services that orchestrate domain rules over the ports.
//!
//! Services receive their ports by injection and hold no global state.

mod mcp_config_service;
mod registry_session;

pub use mcp_config_service::McpConfigService;
pub use registry_session::RegistrySession;
