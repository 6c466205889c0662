//! Remove command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Remove the named connection and save.
///
/// A missing name is reported but is not an error.
pub async fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    let mut session = ctx.open_session().await;
    if !session.remove(name) {
        println!("No MCP server named '{name}'.");
        println!("Use 'toolwire list' to see configured servers.");
        return Ok(());
    }

    super::save(&mut session).await?;
    println!("Removed MCP server '{name}'");
    Ok(())
}
