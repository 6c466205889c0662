//! Agent run-time state channel.
//!
//! The agent process exposes a settable `mcp_config` state slot. This port is
//! the only capability the registry needs from it.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::McpRegistry;

/// Failures pushing state to the agent.
///
/// These are logged by callers and never surfaced as hard errors.
#[derive(Debug, Error)]
pub enum AgentStateError {
    /// The agent endpoint could not be reached.
    #[error("Agent unreachable: {0}")]
    Unreachable(String),

    /// The agent answered with a non-success status.
    #[error("Agent rejected state update (HTTP {status}): {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// The snapshot could not be encoded.
    #[error("Failed to encode state: {0}")]
    Encode(String),
}

/// Write access to the agent's `mcp_config` state slot.
///
/// # Implementations
///
/// - `NoopAgentState` - For tests and offline CLI use
/// - `HttpAgentStateClient` in `toolwire-agent`
#[async_trait]
pub trait AgentStatePort: Send + Sync {
    /// Replace the agent's `mcp_config` with `registry`.
    async fn set_mcp_config(&self, registry: &McpRegistry) -> Result<(), AgentStateError>;

    /// Short description of where state is sent, for log lines.
    fn describe(&self) -> String;
}

/// An agent channel that drops every update.
///
/// Used when no agent endpoint is configured.
#[derive(Debug, Clone, Default)]
pub struct NoopAgentState;

impl NoopAgentState {
    /// Create a new no-op channel.
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AgentStatePort for NoopAgentState {
    async fn set_mcp_config(&self, _registry: &McpRegistry) -> Result<(), AgentStateError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "no agent configured".to_string()
    }
}
