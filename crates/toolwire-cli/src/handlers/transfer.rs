//! Import and export of registry snapshots as JSON files.
//!
//! The file format is the same name -> connection object that is stored
//! and sent to the agent.

use std::path::Path;

use anyhow::Result;
use toolwire_core::{ExampleLoad, McpRegistry};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Write the saved registry as pretty JSON to `output` or stdout.
pub async fn export(ctx: &CliContext, output: Option<&Path>) -> Result<()> {
    let registry = ctx.service().hydrate().await;
    let json = serde_json::to_string_pretty(&registry)?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n")).map_err(CliError::from)?;
            println!(
                "Exported {} server(s) to {}",
                registry.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Read a registry snapshot from `path`.
pub fn read_snapshot(path: &Path) -> Result<McpRegistry> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    let registry = serde_json::from_str(&raw)
        .map_err(|e| CliError::Arguments(format!("{} is not a valid snapshot: {e}", path.display())))?;
    Ok(registry)
}

/// Adopt a snapshot file with the same merge/replace rules as examples.
pub async fn import(ctx: &CliContext, path: &Path, explicit: Option<ExampleLoad>) -> Result<()> {
    let incoming = read_snapshot(path)?;
    let mut session = ctx.open_session().await;

    let Some(mode) = super::resolve_load_mode(&session, explicit)? else {
        println!("Import cancelled.");
        return Ok(());
    };

    session.load_example(&incoming, mode);
    let count = super::save(&mut session).await?;
    println!(
        "Imported {} server(s) from {} ({count} configured)",
        incoming.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::test_support::memory_context;
    use toolwire_core::ConnectionDescriptor;

    #[tokio::test]
    async fn test_export_then_import_elsewhere() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("servers.json");

        let source = memory_context().await;
        let mut registry = McpRegistry::new();
        registry.add("fs", ConnectionDescriptor::stdio("npx", vec!["-y".into(), "fs".into()]));
        registry.add("remote", ConnectionDescriptor::sse("http://localhost:8000/sse"));
        source.service().save(&registry).await.unwrap();
        export(&source, Some(&file)).await.unwrap();

        let target = memory_context().await;
        import(&target, &file, None).await.unwrap();
        assert_eq!(target.service().hydrate().await, registry);
    }

    #[tokio::test]
    async fn test_import_merge_keeps_existing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("servers.json");
        std::fs::write(
            &file,
            r#"{"remote": {"transport": "sse", "url": "http://localhost:8000/sse"}}"#,
        )
        .unwrap();

        let ctx = memory_context().await;
        let mut current = McpRegistry::new();
        current.add("fs", ConnectionDescriptor::stdio("python", vec![]));
        ctx.service().save(&current).await.unwrap();

        import(&ctx, &file, Some(ExampleLoad::Merge)).await.unwrap();
        let saved = ctx.service().hydrate().await;
        assert_eq!(saved.len(), 2);
    }

    #[tokio::test]
    async fn test_import_drops_blank_names() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("servers.json");
        std::fs::write(
            &file,
            r#"{"  ": {"transport": "sse", "url": "http://localhost:8000/sse"},
                "": {"transport": "stdio", "command": "python", "args": []},
                "math": {"transport": "stdio", "command": "python", "args": []}}"#,
        )
        .unwrap();

        let ctx = memory_context().await;
        import(&ctx, &file, None).await.unwrap();

        let saved = ctx.service().hydrate().await;
        let names: Vec<&str> = saved.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["math"]);
    }

    #[test]
    fn test_read_snapshot_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = read_snapshot(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing.downcast_ref::<CliError>(), Some(CliError::Io(_))));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "[1, 2, 3]").unwrap();
        let err = read_snapshot(&bad).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::Arguments(_))));
    }
}
