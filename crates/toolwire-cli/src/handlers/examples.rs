//! Example catalog handlers.

use anyhow::Result;
use toolwire_core::{ExampleCatalog, ExampleLoad};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_stats;

/// Print the built-in examples.
pub fn list(ctx: &CliContext) {
    println!("Available examples:");
    for example in ctx.examples().examples() {
        println!(
            "  {:<12} {} ({})",
            example.name,
            example.description,
            format_stats(&example.registry.stats())
        );
    }
}

/// Adopt an example into the registry and save.
///
/// Prompts for merge/replace when the registry already has entries and no
/// mode was given.
pub async fn load(ctx: &CliContext, name: &str, explicit: Option<ExampleLoad>) -> Result<()> {
    let Some(example) = ctx.examples().find(name) else {
        let known: Vec<_> = ctx.examples().examples().iter().map(|e| e.name).collect();
        return Err(CliError::Arguments(format!(
            "unknown example '{name}' (available: {})",
            known.join(", ")
        ))
        .into());
    };

    let mut session = ctx.open_session().await;
    let Some(mode) = super::resolve_load_mode(&session, explicit)? else {
        println!("Load cancelled.");
        return Ok(());
    };

    session.load_example(&example.registry, mode);
    if !session.is_dirty() {
        println!("Example '{name}' is already loaded.");
        return Ok(());
    }

    let count = super::save(&mut session).await?;
    println!("Loaded example '{name}' ({count} server(s) configured)");
    Ok(())
}
