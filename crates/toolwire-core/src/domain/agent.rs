//! Which backend agent the registry is published to.
//!
//! The two agent runtimes expose the same `mcp_config` state slot behind
//! different routes. Everything that depends on the choice derives it from
//! this one value.

use serde::{Deserialize, Serialize};

/// The agent runtime currently targeted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveAgent {
    /// LangGraph-based agent
    #[default]
    LangGraph,
    /// CrewAI-based agent
    #[serde(alias = "crew-ai")]
    CrewAi,
}

impl ActiveAgent {
    /// Every supported agent.
    pub const ALL: [Self; 2] = [Self::LangGraph, Self::CrewAi];

    /// Short identifier used on the command line and in env vars.
    pub const fn key(self) -> &'static str {
        match self {
            Self::LangGraph => "langgraph",
            Self::CrewAi => "crewai",
        }
    }

    /// Route prefix on the agent runtime.
    pub const fn route(self) -> &'static str {
        match self {
            Self::LangGraph => "/api/copilotkit/langgraph",
            Self::CrewAi => "/api/copilotkit/crewai",
        }
    }

    /// Name the runtime registers the agent under.
    pub const fn agent_name(self) -> &'static str {
        match self {
            Self::LangGraph => "sample_agent",
            Self::CrewAi => "crewai_sample_agent",
        }
    }
}

impl std::fmt::Display for ActiveAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for ActiveAgent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "langgraph" | "lang-graph" => Ok(Self::LangGraph),
            "crewai" | "crew-ai" => Ok(Self::CrewAi),
            other => Err(format!(
                "unknown agent '{other}' (expected langgraph or crewai)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_values_follow_variant() {
        assert_eq!(ActiveAgent::LangGraph.route(), "/api/copilotkit/langgraph");
        assert_eq!(ActiveAgent::LangGraph.agent_name(), "sample_agent");
        assert_eq!(ActiveAgent::CrewAi.route(), "/api/copilotkit/crewai");
        assert_eq!(ActiveAgent::CrewAi.agent_name(), "crewai_sample_agent");
    }

    #[test]
    fn test_parse() {
        assert_eq!("CrewAI".parse::<ActiveAgent>(), Ok(ActiveAgent::CrewAi));
        assert_eq!("langgraph".parse::<ActiveAgent>(), Ok(ActiveAgent::LangGraph));
        assert!("autogen".parse::<ActiveAgent>().is_err());
        for agent in ActiveAgent::ALL {
            assert_eq!(agent.key().parse::<ActiveAgent>(), Ok(agent));
        }
    }
}
