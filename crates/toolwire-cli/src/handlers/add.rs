//! Add command handler.
//!
//! Adds a connection or replaces the one with the same name, then saves.
//! Suspicious input is accepted and reported as a warning.

use anyhow::Result;
use toolwire_core::ConnectionDraft;

use crate::bootstrap::CliContext;
use crate::commands::AddCommand;
use crate::error::CliError;
use crate::presentation::print_diagnostics;

fn draft_for(command: &AddCommand) -> (&str, ConnectionDraft) {
    match command {
        AddCommand::Stdio {
            name,
            command,
            args,
        } => (
            name.as_str(),
            ConnectionDraft::stdio(command.clone(), args.clone()),
        ),
        AddCommand::Sse { name, url } => (name.as_str(), ConnectionDraft::sse(url.clone())),
    }
}

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if the name is blank or the save fails.
pub async fn execute(ctx: &CliContext, command: &AddCommand) -> Result<()> {
    let (name, draft) = draft_for(command);
    let mut session = ctx.open_session().await;

    let replaced = session.registry().contains(name);
    if !session.add_draft(name, &draft) {
        return Err(CliError::Arguments("connection name must not be blank".to_string()).into());
    }
    super::save(&mut session).await?;

    let verb = if replaced { "Updated" } else { "Added" };
    println!("{verb} {} server '{name}'", draft.transport);

    let warnings: Vec<_> = session
        .registry()
        .diagnostics()
        .into_iter()
        .filter(|w| w.name == name)
        .collect();
    print_diagnostics(&warnings);
    Ok(())
}
