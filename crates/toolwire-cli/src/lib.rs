//! Command-line adapter for toolwire.
//!
//! Parses arguments, composes storage and the agent channel in
//! [`bootstrap`], and dispatches to [`handlers`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by the binary only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{AddCommand, Commands, ExamplesCommand, LoadModeArgs};
pub use error::CliError;
pub use parser::Cli;
