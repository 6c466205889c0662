//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use toolwire_core::ActiveAgent;

use crate::commands::Commands;

/// Command-line interface for managing MCP tool-server connections.
#[derive(Parser)]
#[command(name = "toolwire")]
#[command(about = "Manage the MCP servers your agent connects to")]
#[command(version)]
pub struct Cli {
    /// Agent that receives the configuration (langgraph or crewai)
    #[arg(long, global = true, env = "TOOLWIRE_AGENT", default_value = "langgraph")]
    pub agent: ActiveAgent,

    /// Base URL of the agent runtime; without it nothing is published
    #[arg(long = "agent-url", global = true, env = "TOOLWIRE_AGENT_URL")]
    pub agent_url: Option<String>,

    /// Bearer token sent with state updates
    #[arg(
        long = "agent-token",
        global = true,
        env = "TOOLWIRE_AGENT_TOKEN",
        hide_env_values = true
    )]
    pub agent_token: Option<String>,

    /// Override the database file for this invocation
    #[arg(long = "db", global = true)]
    pub db: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
