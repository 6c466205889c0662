//! Errors raised while building the agent client.
//!
//! Request-time failures use [`toolwire_core::AgentStateError`].

use thiserror::Error;

/// Errors constructing an [`HttpAgentStateClient`](crate::HttpAgentStateClient).
#[derive(Debug, Error)]
pub enum AgentClientError {
    /// The configured base URL is not a valid absolute URL.
    #[error("Invalid agent URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parser message
        reason: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
