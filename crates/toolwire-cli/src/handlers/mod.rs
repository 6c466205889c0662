//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Open a session or call the service
//!   3. Format output for the terminal
//!
//! Handlers should NOT touch the database pool or HTTP client directly.

pub mod add;
pub mod agent;
pub mod examples;
pub mod list;
pub mod publish;
pub mod remove;
pub mod shell;
pub mod stats;
pub mod transfer;

use anyhow::Result;
use toolwire_core::{ExampleLoad, RegistrySession};

use crate::error::CliError;
use crate::utils::input;

/// Save the session, converting failures to a CLI error.
pub(crate) async fn save(session: &mut RegistrySession) -> Result<usize> {
    Ok(session.save().await.map_err(CliError::from)?)
}

/// Decide how to adopt an incoming registry.
///
/// An explicit flag wins; an empty registry is always replaced; otherwise the
/// user is asked. `None` means the user cancelled.
pub(crate) fn resolve_load_mode(
    session: &RegistrySession,
    explicit: Option<ExampleLoad>,
) -> Result<Option<ExampleLoad>> {
    if let Some(mode) = explicit {
        return Ok(Some(mode));
    }
    if !session.needs_load_choice() {
        return Ok(Some(ExampleLoad::Replace));
    }
    input::prompt_load_mode(session.registry().len())
}
