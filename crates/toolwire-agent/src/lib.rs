//! HTTP delivery of the connection registry to the agent runtime.
//!
//! Implements [`toolwire_core::AgentStatePort`] with `reqwest`. The
//! targeted agent ([`toolwire_core::ActiveAgent`]) is part of the client
//! configuration and decides the route and agent name.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;

pub use client::HttpAgentStateClient;
pub use config::{AgentClientConfig, DEFAULT_AGENT_URL};
pub use error::AgentClientError;

#[cfg(test)]
use axum as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio as _;
