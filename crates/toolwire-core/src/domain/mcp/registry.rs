//! The MCP connection registry.
//!
//! A flat mapping from user-chosen connection name to descriptor. There is no
//! identity beyond the name: re-adding a name replaces the whole descriptor.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::types::{ConnectionDescriptor, ConnectionDraft, TransportKind};

/// How an example (or imported) registry is adopted into a non-empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleLoad {
    /// Discard every current entry and take the example as-is
    Replace,
    /// Keep current entries; example entries overwrite same-named ones
    Merge,
}

/// Partition counts over the registry, recomputed on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStats {
    /// Number of connections
    pub total_servers: usize,
    /// Connections with the stdio transport
    pub stdio_servers: usize,
    /// Connections with the SSE transport
    pub sse_servers: usize,
}

/// What looks wrong about an accepted connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Stdio command is empty or blank
    EmptyCommand,
    /// Stdio command contains whitespace (arguments belong in `args`)
    CommandHasWhitespace,
    /// SSE url is empty or blank
    EmptyUrl,
    /// SSE url does not parse as an absolute http(s) URL
    MalformedUrl,
}

/// Non-blocking diagnostic for one registry entry.
///
/// The registry never rejects these entries; the agent is the one that fails
/// when it tries to use them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionWarning {
    /// Connection name
    pub name: String,
    /// Warning category
    pub kind: WarningKind,
    /// Human-readable message
    pub message: String,
}

/// Named set of MCP tool-server connections.
///
/// Serializes as a plain JSON object keyed by connection name, which is the
/// snapshot format shared by durable storage and the agent's `mcp_config`
/// state slot. Deserialization drops entries with blank names, so a stored
/// or imported snapshot can never hold a connection `add` would refuse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct McpRegistry {
    servers: BTreeMap<String, ConnectionDescriptor>,
}

impl McpRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of connections.
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    /// Whether the registry has no connections.
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Look up a connection by name.
    pub fn get(&self, name: &str) -> Option<&ConnectionDescriptor> {
        self.servers.get(name)
    }

    /// Whether a connection with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.servers.contains_key(name)
    }

    /// Iterate connections in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConnectionDescriptor)> {
        self.servers.iter().map(|(name, desc)| (name.as_str(), desc))
    }

    /// Insert or replace the connection at `name`.
    ///
    /// Returns `false` and leaves the registry untouched when `name` is empty
    /// or whitespace-only. The descriptor itself is not validated.
    pub fn add(&mut self, name: &str, descriptor: ConnectionDescriptor) -> bool {
        if name.trim().is_empty() {
            tracing::debug!("Ignoring MCP connection with blank name");
            return false;
        }

        if let Some(previous) = self.servers.insert(name.to_string(), descriptor) {
            tracing::debug!(
                server_name = %name,
                previous_transport = %previous.transport(),
                "Replaced existing MCP connection"
            );
        }
        true
    }

    /// Build a descriptor from raw form fields and insert it.
    pub fn add_draft(&mut self, name: &str, draft: &ConnectionDraft) -> bool {
        self.add(name, draft.to_descriptor())
    }

    /// Remove the connection at `name`. Absent names are a no-op.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.servers.remove(name).is_some()
    }

    /// Whether adopting an example needs the caller to pick merge or replace.
    pub fn needs_load_choice(&self) -> bool {
        !self.is_empty()
    }

    /// Adopt an example registry.
    ///
    /// An empty registry always takes the example wholesale; `mode` only
    /// matters when there are existing entries.
    pub fn load_example(&mut self, example: &Self, mode: ExampleLoad) {
        if self.is_empty() || mode == ExampleLoad::Replace {
            self.servers.clear();
        }

        for (name, descriptor) in &example.servers {
            self.add(name, descriptor.clone());
        }
    }

    /// Count connections per transport.
    pub fn stats(&self) -> RegistryStats {
        let stdio_servers = self
            .servers
            .values()
            .filter(|d| d.transport() == TransportKind::Stdio)
            .count();

        RegistryStats {
            total_servers: self.servers.len(),
            stdio_servers,
            sse_servers: self.servers.len() - stdio_servers,
        }
    }

    /// Report entries that the agent is likely to reject.
    ///
    /// Purely advisory: nothing here changes what `add` accepts.
    pub fn diagnostics(&self) -> Vec<ConnectionWarning> {
        let mut warnings = Vec::new();

        for (name, descriptor) in &self.servers {
            let mut push = |kind, message: String| {
                warnings.push(ConnectionWarning {
                    name: name.clone(),
                    kind,
                    message,
                });
            };

            match descriptor {
                ConnectionDescriptor::Stdio { command, .. } => {
                    if command.trim().is_empty() {
                        push(
                            WarningKind::EmptyCommand,
                            "stdio connection has no command".to_string(),
                        );
                    } else if command.trim().contains(char::is_whitespace) {
                        push(
                            WarningKind::CommandHasWhitespace,
                            format!(
                                "command '{command}' contains whitespace; put arguments in args"
                            ),
                        );
                    }
                }
                ConnectionDescriptor::Sse { url } => {
                    if url.trim().is_empty() {
                        push(WarningKind::EmptyUrl, "sse connection has no url".to_string());
                    } else {
                        match url::Url::parse(url) {
                            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                            Ok(parsed) => push(
                                WarningKind::MalformedUrl,
                                format!("url scheme '{}' is not http(s)", parsed.scheme()),
                            ),
                            Err(e) => push(
                                WarningKind::MalformedUrl,
                                format!("url '{url}' does not parse: {e}"),
                            ),
                        }
                    }
                }
            }
        }

        warnings
    }
}

impl FromIterator<(String, ConnectionDescriptor)> for McpRegistry {
    fn from_iter<I: IntoIterator<Item = (String, ConnectionDescriptor)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (name, descriptor) in iter {
            registry.add(&name, descriptor);
        }
        registry
    }
}

impl<'de> Deserialize<'de> for McpRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, ConnectionDescriptor>::deserialize(deserializer)?;
        let mut registry = Self::new();
        for (name, descriptor) in raw {
            if name.trim().is_empty() {
                tracing::warn!(server_name = ?name, "Dropping stored MCP connection with blank name");
                continue;
            }
            registry.add(&name, descriptor);
        }
        Ok(registry)
    }
}
