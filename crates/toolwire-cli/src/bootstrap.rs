//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Database pool and repository (via toolwire-db)
//! - Agent state channel (via toolwire-agent, or a no-op when unconfigured)
//! - The MCP configuration service (via toolwire-core)
//!
//! Command handlers receive the composed `CliContext` and open sessions on it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use toolwire_agent::{AgentClientConfig, HttpAgentStateClient};
use toolwire_core::paths::{database_path, normalize_user_path};
use toolwire_core::{
    ActiveAgent, AgentStatePort, BuiltinExamples, McpConfigService, NoopAgentState,
    RegistrySession,
};
use toolwire_db::{CoreFactory, open_database};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Agent that receives published configuration.
    pub agent: ActiveAgent,
    /// Agent runtime base URL; `None` disables publishing.
    pub agent_url: Option<String>,
    /// Optional bearer token for the agent runtime.
    pub agent_token: Option<String>,
    /// Database file override.
    pub db_path: Option<PathBuf>,
}

impl CliConfig {
    /// Build config from parsed global options.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            agent: cli.agent,
            agent_url: cli.agent_url.clone().filter(|url| !url.trim().is_empty()),
            agent_token: cli.agent_token.clone(),
            db_path: cli.db.clone(),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    service: Arc<McpConfigService>,
    agent_channel: Arc<dyn AgentStatePort>,
    agent: ActiveAgent,
    publishing: bool,
    examples: BuiltinExamples,
}

impl CliContext {
    /// Access the MCP configuration service.
    pub const fn service(&self) -> &Arc<McpConfigService> {
        &self.service
    }

    /// Access the agent state channel.
    pub const fn agent_channel(&self) -> &Arc<dyn AgentStatePort> {
        &self.agent_channel
    }

    /// The configured agent.
    pub const fn agent(&self) -> ActiveAgent {
        self.agent
    }

    /// Whether a real agent endpoint is configured.
    pub const fn is_publishing(&self) -> bool {
        self.publishing
    }

    /// Access the example catalog.
    pub const fn examples(&self) -> &BuiltinExamples {
        &self.examples
    }

    /// Open an editing session (hydrates and publishes once).
    pub async fn open_session(&self) -> RegistrySession {
        RegistrySession::open(Arc::clone(&self.service)).await
    }
}

/// Build the agent channel for `config`.
///
/// Without an agent URL the channel is a no-op.
pub fn agent_channel(config: &CliConfig) -> Result<Arc<dyn AgentStatePort>> {
    let Some(ref url) = config.agent_url else {
        tracing::debug!("No agent URL configured; publishing is disabled");
        return Ok(Arc::new(NoopAgentState::new()));
    };

    let client_config = AgentClientConfig::new(url.clone())
        .with_agent(config.agent)
        .with_optional_token(config.agent_token.clone());
    let client = HttpAgentStateClient::new(&client_config)
        .map_err(|e| CliError::Config(e.to_string()))?;
    tracing::debug!(url = %client.state_url(), "Agent channel configured");
    Ok(Arc::new(client))
}

/// Bootstrap the CLI application.
///
/// Resolves the database path, opens the pool, builds the agent channel and
/// composes the configuration service. Storage problems do not fail here:
/// reads fall back to an empty registry and saves report a database error.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    // 1. Agent channel first so a bad URL fails before touching storage
    let agent_channel = agent_channel(&config)?;

    // 2. Database pool
    let db_path = match config.db_path {
        Some(ref path) => normalize_user_path(&path.to_string_lossy()),
        None => database_path(),
    }
    .map_err(|e| CliError::Config(e.to_string()))?;
    // Opened lazily: an unusable file fails reads and saves, not start-up
    let pool = open_database(&db_path);

    // 3. Service over storage and channel
    let service = Arc::new(CoreFactory::build_mcp_config_service(
        pool,
        Arc::clone(&agent_channel),
    ));

    Ok(bootstrap_with(
        service,
        agent_channel,
        config.agent,
        config.agent_url.is_some(),
    ))
}

/// Compose a context from prebuilt parts (for testing).
pub fn bootstrap_with(
    service: Arc<McpConfigService>,
    agent_channel: Arc<dyn AgentStatePort>,
    agent: ActiveAgent,
    publishing: bool,
) -> CliContext {
    CliContext {
        service,
        agent_channel,
        agent,
        publishing,
        examples: BuiltinExamples::new(),
    }
}
