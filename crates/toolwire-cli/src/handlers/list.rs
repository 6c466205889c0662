//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{format_stats, print_diagnostics, print_registry_table};

/// Show every connection, the counts, and any advisory warnings.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let session = ctx.open_session().await;
    let registry = session.registry();

    print_registry_table(registry);
    if !registry.is_empty() {
        println!("{}", format_stats(&session.stats()));
    }
    print_diagnostics(&registry.diagnostics());
    Ok(())
}
