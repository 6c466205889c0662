//! Interactive editing shell.
//!
//! Keeps one session open across commands. Edits stay in memory until
//! `save`; quitting with unsaved edits asks for a second `quit`.

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use toolwire_core::{ConnectionDraft, ExampleCatalog, ExampleLoad, RegistrySession};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_stats, print_diagnostics, print_registry_table};
use crate::utils::input::parse_load_choice;

const HELP: &str = "\
Commands:
  list                               show configured servers
  stats                              show counts by transport
  add stdio <name> <command> [args]  add or replace a local server
  add sse <name> <url>               add or replace a remote server
  remove <name>                      remove a server
  example <name> [merge|replace]     adopt a built-in example
  save                               persist and publish changes
  publish                            push current edits to the agent without saving
  help                               show this help
  quit                               leave the shell";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Stats,
    Add {
        name: String,
        draft: ConnectionDraft,
    },
    Remove(String),
    Example {
        name: String,
        mode: Option<ExampleLoad>,
    },
    Save,
    Publish,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let command = match (verb.to_lowercase().as_str(), rest.as_slice()) {
            ("list" | "ls", []) => Self::List,
            ("stats", []) => Self::Stats,
            ("add", ["stdio", name, command, args @ ..]) => Self::Add {
                name: (*name).to_string(),
                draft: ConnectionDraft::stdio(*command, args.join(" ")),
            },
            ("add", ["sse", name, url]) => Self::Add {
                name: (*name).to_string(),
                draft: ConnectionDraft::sse(*url),
            },
            ("add", _) => {
                return Err("usage: add stdio <name> <command> [args...] | add sse <name> <url>".into());
            }
            ("remove" | "rm", [name]) => Self::Remove((*name).to_string()),
            ("example", [name]) => Self::Example {
                name: (*name).to_string(),
                mode: None,
            },
            ("example", [name, mode]) => Self::Example {
                name: (*name).to_string(),
                mode: Some(parse_load_choice(mode).ok_or("mode must be 'merge' or 'replace'")?),
            },
            ("save", []) => Self::Save,
            ("publish", []) => Self::Publish,
            ("help" | "?", _) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            (other, _) => return Err(format!("unknown or malformed command '{other}' (try 'help')")),
        };
        Ok(Some(command))
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Shell state over one editing session.
pub struct Shell<'a> {
    ctx: &'a CliContext,
    session: RegistrySession,
    quit_armed: bool,
}

impl<'a> Shell<'a> {
    /// Open a session for the shell.
    pub async fn open(ctx: &'a CliContext) -> Self {
        Self {
            ctx,
            session: ctx.open_session().await,
            quit_armed: false,
        }
    }

    /// The underlying session.
    pub const fn session(&self) -> &RegistrySession {
        &self.session
    }

    /// Run one command, printing its output.
    pub async fn handle(&mut self, command: ShellCommand) -> Flow {
        if command != ShellCommand::Quit {
            self.quit_armed = false;
        }

        match command {
            ShellCommand::List => {
                print_registry_table(self.session.registry());
                print_diagnostics(&self.session.registry().diagnostics());
            }
            ShellCommand::Stats => println!("{}", format_stats(&self.session.stats())),
            ShellCommand::Add { name, draft } => {
                if self.session.add_draft(&name, &draft) {
                    println!("Set {} server '{name}' (unsaved)", draft.transport);
                } else {
                    println!("Connection name must not be blank");
                }
            }
            ShellCommand::Remove(name) => {
                if self.session.remove(&name) {
                    println!("Removed '{name}' (unsaved)");
                } else {
                    println!("No MCP server named '{name}'");
                }
            }
            ShellCommand::Example { name, mode } => self.load_example(&name, mode),
            ShellCommand::Save => match self.session.save().await {
                Ok(count) => println!("Saved {count} server(s)"),
                Err(e) => println!(
                    "Error: {}. Your edits are kept in this session.",
                    CliError::from(e)
                ),
            },
            ShellCommand::Publish => {
                self.session.publish().await;
                println!("Sent current edits to {}", self.session.agent_target());
            }
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => {
                if self.session.is_dirty() && !self.quit_armed {
                    self.quit_armed = true;
                    println!("You have unsaved changes. Type 'save', or 'quit' again to discard them.");
                } else {
                    return Flow::Exit;
                }
            }
        }
        Flow::Continue
    }

    fn load_example(&mut self, name: &str, mode: Option<ExampleLoad>) {
        let Some(example) = self.ctx.examples().find(name) else {
            println!("Unknown example '{name}'");
            return;
        };

        let mode = match mode {
            Some(mode) => mode,
            None if self.session.needs_load_choice() => {
                println!("Registry is not empty; use 'example {name} merge' or 'example {name} replace'");
                return;
            }
            None => ExampleLoad::Replace,
        };

        self.session.load_example(&example.registry, mode);
        println!(
            "Loaded example '{name}' (unsaved): {}",
            format_stats(&self.session.stats())
        );
    }
}

/// Run the interactive shell until `quit` or end of input.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let mut editor = DefaultEditor::new().context("Failed to start line editor")?;
    let mut shell = Shell::open(ctx).await;

    println!(
        "toolwire shell ({}). Type 'help' for commands.",
        format_stats(&shell.session().stats())
    );

    loop {
        let command = match editor.readline("toolwire> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str()).ok();
                }
                match ShellCommand::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(message) => {
                        println!("{message}");
                        continue;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("(type 'quit' to exit)");
                continue;
            }
            Err(ReadlineError::Eof) => ShellCommand::Quit,
            Err(e) => return Err(e).context("Failed to read input"),
        };

        if shell.handle(command).await == Flow::Exit {
            break;
        }
    }
    Ok(())
}
