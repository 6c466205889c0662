//! Publish command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Push the saved registry to the agent and report the outcome.
///
/// Unlike the background publish done by sessions, failures here are
/// returned so the exit code reflects them.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    if !ctx.is_publishing() {
        println!("No agent URL configured; set --agent-url or TOOLWIRE_AGENT_URL.");
        return Ok(());
    }

    let registry = ctx.service().hydrate().await;
    ctx.agent_channel()
        .set_mcp_config(&registry)
        .await
        .map_err(CliError::from)?;

    println!(
        "Published {} server(s) to {}",
        registry.len(),
        ctx.agent_channel().describe()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::test_support::memory_context;

    #[tokio::test]
    async fn test_publish_without_url_is_a_no_op() {
        let ctx = memory_context().await;
        execute(&ctx).await.unwrap();
    }
}
