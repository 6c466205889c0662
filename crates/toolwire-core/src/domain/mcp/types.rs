//! MCP connection descriptor types.
//!
//! These types are shared with the agent runtime, which reads them back from
//! its `mcp_config` state slot. The JSON shape is part of that contract.

use serde::{Deserialize, Serialize};

/// Transport used to reach an MCP tool server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Local subprocess speaking over stdin/stdout
    #[default]
    Stdio,
    /// Remote server reached over server-sent events
    Sse,
}

impl TransportKind {
    /// Wire name of the transport (`"stdio"` or `"sse"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdio => "stdio",
            Self::Sse => "sse",
        }
    }
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "sse" => Ok(Self::Sse),
            other => Err(format!("unknown transport '{other}' (expected stdio or sse)")),
        }
    }
}

/// Connection descriptor for a single MCP tool server.
///
/// Serialized with an internal `transport` tag so the stored JSON reads
/// `{"command": "python", "args": [...], "transport": "stdio"}` or
/// `{"url": "http://...", "transport": "sse"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "transport", rename_all = "lowercase")]
pub enum ConnectionDescriptor {
    /// Stdio server - the agent spawns `command` with `args`
    Stdio {
        /// Executable to launch (taken verbatim, not resolved)
        command: String,
        /// Ordered argument list
        #[serde(default)]
        args: Vec<String>,
    },
    /// SSE server - the agent connects to `url`
    Sse {
        /// Endpoint URL (taken verbatim, not validated)
        url: String,
    },
}

impl ConnectionDescriptor {
    /// Create a stdio descriptor.
    pub fn stdio(command: impl Into<String>, args: Vec<String>) -> Self {
        Self::Stdio {
            command: command.into(),
            args,
        }
    }

    /// Create an SSE descriptor.
    pub fn sse(url: impl Into<String>) -> Self {
        Self::Sse { url: url.into() }
    }

    /// Transport kind of this descriptor.
    pub const fn transport(&self) -> TransportKind {
        match self {
            Self::Stdio { .. } => TransportKind::Stdio,
            Self::Sse { .. } => TransportKind::Sse,
        }
    }

    /// One-line human summary (`python server.py --verbose` or the URL).
    pub fn target(&self) -> String {
        match self {
            Self::Stdio { command, args } if args.is_empty() => command.clone(),
            Self::Stdio { command, args } => format!("{command} {}", args.join(" ")),
            Self::Sse { url } => url.clone(),
        }
    }
}

/// Raw connection form fields as entered by the user.
///
/// Only the fields relevant to `transport` are read when building the
/// descriptor; the rest are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionDraft {
    /// Selected transport
    pub transport: TransportKind,
    /// Stdio command
    pub command: String,
    /// Stdio arguments as one whitespace-separated string
    pub raw_args: String,
    /// SSE endpoint
    pub url: String,
}

impl ConnectionDraft {
    /// Draft for a stdio server.
    pub fn stdio(command: impl Into<String>, raw_args: impl Into<String>) -> Self {
        Self {
            transport: TransportKind::Stdio,
            command: command.into(),
            raw_args: raw_args.into(),
            url: String::new(),
        }
    }

    /// Draft for an SSE server.
    pub fn sse(url: impl Into<String>) -> Self {
        Self {
            transport: TransportKind::Sse,
            url: url.into(),
            ..Self::default()
        }
    }

    /// Build the descriptor for the selected transport.
    ///
    /// Stdio arguments are split on whitespace with empty tokens dropped.
    /// Command and URL are copied as-is.
    pub fn to_descriptor(&self) -> ConnectionDescriptor {
        match self.transport {
            TransportKind::Stdio => ConnectionDescriptor::Stdio {
                command: self.command.clone(),
                args: split_args(&self.raw_args),
            },
            TransportKind::Sse => ConnectionDescriptor::Sse {
                url: self.url.clone(),
            },
        }
    }
}

/// Split a raw argument string on whitespace, discarding empty tokens.
pub fn split_args(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdio_draft_splits_args() {
        let draft = ConnectionDraft::stdio("python", "server.py --verbose");
        assert_eq!(
            draft.to_descriptor(),
            ConnectionDescriptor::stdio(
                "python",
                vec!["server.py".to_string(), "--verbose".to_string()]
            )
        );
    }

    #[test]
    fn test_split_args_drops_empty_tokens() {
        assert_eq!(split_args("  a\t\tb \n c  "), vec!["a", "b", "c"]);
        assert!(split_args("   ").is_empty());
    }

    #[test]
    fn test_sse_draft_ignores_stdio_fields() {
        let draft = ConnectionDraft {
            transport: TransportKind::Sse,
            command: "ignored".to_string(),
            raw_args: "also ignored".to_string(),
            url: "http://localhost:8000/events".to_string(),
        };
        assert_eq!(
            draft.to_descriptor(),
            ConnectionDescriptor::sse("http://localhost:8000/events")
        );
    }

    #[test]
    fn test_serialization_shape() {
        let stdio = ConnectionDescriptor::stdio("node", vec!["server.js".to_string()]);
        let json = serde_json::to_value(&stdio).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"command": "node", "args": ["server.js"], "transport": "stdio"})
        );

        let sse = ConnectionDescriptor::sse("http://localhost:3001/sse");
        let json = serde_json::to_value(&sse).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"url": "http://localhost:3001/sse", "transport": "sse"})
        );
    }

    #[test]
    fn test_stdio_without_args_deserializes() {
        let descriptor: ConnectionDescriptor =
            serde_json::from_str(r#"{"command": "uvx", "transport": "stdio"}"#).unwrap();
        assert_eq!(descriptor, ConnectionDescriptor::stdio("uvx", Vec::new()));
    }

    #[test]
    fn test_unknown_transport_rejected() {
        let result: Result<ConnectionDescriptor, _> =
            serde_json::from_str(r#"{"url": "ws://x", "transport": "websocket"}"#);
        assert!(result.is_err());
        assert!("websocket".parse::<TransportKind>().is_err());
        assert_eq!("SSE".parse::<TransportKind>(), Ok(TransportKind::Sse));
    }

    #[test]
    fn test_target_summary() {
        assert_eq!(ConnectionDescriptor::stdio("npx", vec![]).target(), "npx");
        assert_eq!(
            ConnectionDescriptor::stdio("npx", vec!["-y".into(), "pkg".into()]).target(),
            "npx -y pkg"
        );
    }
}
