//! `reqwest` implementation of the agent state port.

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use toolwire_core::{ActiveAgent, AgentStateError, AgentStatePort, McpRegistry};

use crate::config::AgentClientConfig;
use crate::error::AgentClientError;

/// Request body for a state update.
#[derive(Serialize)]
struct StateUpdate<'a> {
    mcp_config: &'a McpRegistry,
}

/// Pushes the registry to the agent runtime over HTTP.
///
/// Sends `PUT {base}{route}/agents/{agent_name}/state` with
/// `{"mcp_config": ...}`. One attempt per call; callers decide what a
/// failure means.
pub struct HttpAgentStateClient {
    client: reqwest::Client,
    state_url: Url,
    agent: ActiveAgent,
    token: Option<String>,
}

impl HttpAgentStateClient {
    /// Create a client from configuration.
    pub fn new(config: &AgentClientConfig) -> Result<Self, AgentClientError> {
        let state_url = state_url(&config.base_url, config.agent)?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            state_url,
            agent: config.agent,
            token: config.token.clone(),
        })
    }

    /// Full URL state updates are sent to.
    pub const fn state_url(&self) -> &Url {
        &self.state_url
    }
}

/// Build the state endpoint for `agent` under `base_url`.
pub(crate) fn state_url(base_url: &str, agent: ActiveAgent) -> Result<Url, AgentClientError> {
    let invalid = |reason: String| AgentClientError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let base = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
    }

    let joined = format!(
        "{}{}/agents/{}/state",
        base.as_str().trim_end_matches('/'),
        agent.route(),
        agent.agent_name()
    );
    Url::parse(&joined).map_err(|e| invalid(e.to_string()))
}

#[async_trait]
impl AgentStatePort for HttpAgentStateClient {
    async fn set_mcp_config(&self, registry: &McpRegistry) -> Result<(), AgentStateError> {
        let mut request = self
            .client
            .put(self.state_url.clone())
            .json(&StateUpdate {
                mcp_config: registry,
            });
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                AgentStateError::Encode(e.to_string())
            } else {
                AgentStateError::Unreachable(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::trace!(url = %self.state_url, status = status.as_u16(), "Agent accepted state");
            return Ok(());
        }

        let message = response
            .text()
            .await
            .ok()
            .filter(|body| !body.trim().is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());

        Err(AgentStateError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    fn describe(&self) -> String {
        format!("{} agent at {}", self.agent, self.state_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_url_per_agent() {
        let url = state_url("http://localhost:3000", ActiveAgent::LangGraph).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/copilotkit/langgraph/agents/sample_agent/state"
        );

        let url = state_url("http://localhost:3000/", ActiveAgent::CrewAi).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/copilotkit/crewai/agents/crewai_sample_agent/state"
        );
    }

    #[test]
    fn test_state_url_keeps_base_path() {
        let url = state_url("https://example.com/runtime", ActiveAgent::LangGraph).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/runtime/api/copilotkit/langgraph/agents/sample_agent/state"
        );
    }

    #[test]
    fn test_state_url_rejects_bad_base() {
        assert!(matches!(
            state_url("localhost:3000", ActiveAgent::LangGraph),
            Err(AgentClientError::InvalidUrl { .. })
        ));
        assert!(matches!(
            state_url("not a url", ActiveAgent::LangGraph),
            Err(AgentClientError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_describe_names_agent() {
        let client =
            HttpAgentStateClient::new(&AgentClientConfig::new("http://localhost:3000")).unwrap();
        assert!(client.describe().starts_with("langgraph agent at http://localhost:3000/"));
    }
}
