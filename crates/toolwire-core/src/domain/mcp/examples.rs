//! Built-in example configurations offered for one-click adoption.
//!
//! The catalog is read-only; adopting an example copies it into the
//! user's registry via [`McpRegistry::load_example`].

use super::registry::McpRegistry;
use super::types::ConnectionDescriptor;

/// A named, read-only example registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleConfig {
    /// Catalog key
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// The registry to adopt
    pub registry: McpRegistry,
}

/// Source of example configurations.
pub trait ExampleCatalog: Send + Sync {
    /// All examples, in display order.
    fn examples(&self) -> Vec<ExampleConfig>;

    /// Look up one example by name.
    fn find(&self, name: &str) -> Option<ExampleConfig> {
        self.examples().into_iter().find(|e| e.name == name)
    }
}

/// The examples shipped with toolwire.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinExamples;

impl BuiltinExamples {
    /// Create the built-in catalog.
    pub const fn new() -> Self {
        Self
    }
}

/// The configuration the agent falls back to when its `mcp_config` slot is empty.
pub fn default_agent_config() -> McpRegistry {
    std::iter::once((
        "math".to_string(),
        ConnectionDescriptor::stdio("python", vec!["agent/math_server.py".to_string()]),
    ))
    .collect()
}

impl ExampleCatalog for BuiltinExamples {
    fn examples(&self) -> Vec<ExampleConfig> {
        vec![
            ExampleConfig {
                name: "math",
                description: "Local math tool server launched with python",
                registry: default_agent_config(),
            },
            ExampleConfig {
                name: "filesystem",
                description: "Reference filesystem server via npx, scoped to /tmp",
                registry: std::iter::once((
                    "filesystem".to_string(),
                    ConnectionDescriptor::stdio(
                        "npx",
                        vec![
                            "-y".to_string(),
                            "@modelcontextprotocol/server-filesystem".to_string(),
                            "/tmp".to_string(),
                        ],
                    ),
                ))
                .collect(),
            },
            ExampleConfig {
                name: "remote-sse",
                description: "Tool server already running on localhost:8000",
                registry: std::iter::once((
                    "remote".to_string(),
                    ConnectionDescriptor::sse("http://localhost:8000/sse"),
                ))
                .collect(),
            },
            ExampleConfig {
                name: "mixed",
                description: "Math over stdio plus a remote SSE server",
                registry: [
                    (
                        "math".to_string(),
                        ConnectionDescriptor::stdio(
                            "python",
                            vec!["agent/math_server.py".to_string()],
                        ),
                    ),
                    (
                        "remote".to_string(),
                        ConnectionDescriptor::sse("http://localhost:8000/sse"),
                    ),
                ]
                .into_iter()
                .collect(),
            },
        ]
    }
}
