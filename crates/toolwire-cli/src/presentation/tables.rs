//! Table formatting utilities for CLI output.

use toolwire_core::{ConnectionWarning, McpRegistry, RegistryStats};

const NAME_WIDTH: usize = 20;
const TARGET_WIDTH: usize = 52;

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use toolwire_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// One-line summary of the registry counts.
pub fn format_stats(stats: &RegistryStats) -> String {
    format!(
        "{} server(s): {} stdio, {} sse",
        stats.total_servers, stats.stdio_servers, stats.sse_servers
    )
}

/// Render the registry as table rows (without header).
fn registry_rows(registry: &McpRegistry) -> Vec<String> {
    registry
        .iter()
        .map(|(name, descriptor)| {
            format!(
                "{:<NAME_WIDTH$} {:<6} {}",
                truncate_string(name, NAME_WIDTH),
                descriptor.transport().as_str(),
                truncate_string(&descriptor.target(), TARGET_WIDTH)
            )
        })
        .collect()
}

/// Print the registry as a table.
pub fn print_registry_table(registry: &McpRegistry) {
    if registry.is_empty() {
        println!("No MCP servers configured.");
        println!("Use 'toolwire add' or 'toolwire examples load <name>' to get started.");
        return;
    }

    let width = NAME_WIDTH + TARGET_WIDTH + 8;
    println!("{:<NAME_WIDTH$} {:<6} TARGET", "NAME", "TYPE");
    print_separator(width);
    for row in registry_rows(registry) {
        println!("{row}");
    }
    print_separator(width);
}

/// Print advisory warnings, if any.
pub fn print_diagnostics(warnings: &[ConnectionWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!();
    println!("Warnings:");
    for warning in warnings {
        println!("  ! {}: {}", warning.name, warning.message);
    }
}
