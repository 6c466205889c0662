//! Public configuration for the agent state client.

use std::time::Duration;

use toolwire_core::ActiveAgent;

/// Default agent runtime address.
pub const DEFAULT_AGENT_URL: &str = "http://localhost:3000";

/// Configuration for [`HttpAgentStateClient`](crate::HttpAgentStateClient).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use toolwire_agent::AgentClientConfig;
/// use toolwire_core::ActiveAgent;
///
/// let config = AgentClientConfig::new("http://localhost:3000")
///     .with_agent(ActiveAgent::CrewAi)
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct AgentClientConfig {
    /// Base URL of the agent runtime
    pub(crate) base_url: String,
    /// Which agent receives state
    pub(crate) agent: ActiveAgent,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Optional bearer token
    pub(crate) token: Option<String>,
}

impl Default for AgentClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AGENT_URL.to_string(),
            agent: ActiveAgent::default(),
            user_agent: concat!("toolwire-agent/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
            token: None,
        }
    }
}

impl AgentClientConfig {
    /// Create a configuration pointing at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Select the agent that receives state.
    #[must_use]
    pub const fn with_agent(mut self, agent: ActiveAgent) -> Self {
        self.agent = agent;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set an optional bearer token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// The configured agent.
    pub const fn agent(&self) -> ActiveAgent {
        self.agent
    }
}
