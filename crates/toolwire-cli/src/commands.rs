//! Subcommand definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use toolwire_core::ExampleLoad;

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List configured connections with stats and warnings
    List,
    /// Show connection counts by transport
    Stats,
    /// Add or replace a connection
    Add {
        #[command(subcommand)]
        transport: AddCommand,
    },
    /// Remove a connection by name
    Remove {
        /// Connection name
        name: String,
    },
    /// Browse and adopt built-in example configurations
    Examples {
        #[command(subcommand)]
        command: ExamplesCommand,
    },
    /// Write the saved configuration as JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Adopt a configuration from a JSON file
    Import {
        /// JSON file with a name -> connection object
        file: PathBuf,
        #[command(flatten)]
        load: LoadModeArgs,
    },
    /// Push the saved configuration to the agent
    Publish,
    /// Show which agent receives the configuration
    Agent,
    /// Interactive editing session
    Shell,
}

/// Transport-specific `add` forms.
#[derive(Subcommand)]
pub enum AddCommand {
    /// Local server launched as a subprocess
    Stdio {
        /// Connection name
        name: String,
        /// Executable to launch
        #[arg(long)]
        command: String,
        /// Arguments as one string, split on whitespace
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        args: String,
    },
    /// Remote server reached over server-sent events
    Sse {
        /// Connection name
        name: String,
        /// Endpoint URL
        #[arg(long)]
        url: String,
    },
}

/// Example catalog commands.
#[derive(Subcommand)]
pub enum ExamplesCommand {
    /// Show available examples
    List,
    /// Adopt an example into the registry
    Load {
        /// Example name
        example: String,
        #[command(flatten)]
        load: LoadModeArgs,
    },
}

/// Merge/replace choice for adopting a configuration.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct LoadModeArgs {
    /// Keep existing connections; incoming ones win on name clashes
    #[arg(long, conflicts_with = "replace")]
    pub merge: bool,
    /// Discard existing connections first
    #[arg(long)]
    pub replace: bool,
}

impl LoadModeArgs {
    /// The explicitly chosen mode, if any.
    pub const fn mode(self) -> Option<ExampleLoad> {
        if self.merge {
            Some(ExampleLoad::Merge)
        } else if self.replace {
            Some(ExampleLoad::Replace)
        } else {
            None
        }
    }
}
