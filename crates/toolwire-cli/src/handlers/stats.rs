//! Stats command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Print the per-transport counts.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let stats = ctx.open_session().await.stats();
    println!("Total servers: {}", stats.total_servers);
    println!("Stdio servers: {}", stats.stdio_servers);
    println!("SSE servers:   {}", stats.sse_servers);
    Ok(())
}
