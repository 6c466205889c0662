//! CLI entry point - the composition root.
//!
//! Infrastructure is wired together only via `bootstrap`; command dispatch
//! routes to handlers which work on the composed `CliContext`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use toolwire_cli::error::exit_code_for;
use toolwire_cli::{Cli, CliConfig, Commands, ExamplesCommand, bootstrap, handlers};
use toolwire_core::paths::env_file_path;

/// Initialise logging. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(config)?;

    match command {
        Commands::List => handlers::list::execute(&ctx).await?,
        Commands::Stats => handlers::stats::execute(&ctx).await?,
        Commands::Add { transport } => handlers::add::execute(&ctx, &transport).await?,
        Commands::Remove { name } => handlers::remove::execute(&ctx, &name).await?,
        Commands::Examples { command } => match command {
            ExamplesCommand::List => handlers::examples::list(&ctx),
            ExamplesCommand::Load { example, load } => {
                handlers::examples::load(&ctx, &example, load.mode()).await?;
            }
        },
        Commands::Export { output } => {
            handlers::transfer::export(&ctx, output.as_deref()).await?;
        }
        Commands::Import { file, load } => {
            handlers::transfer::import(&ctx, &file, load.mode()).await?;
        }
        Commands::Publish => handlers::publish::execute(&ctx).await?,
        Commands::Agent => handlers::agent::execute(&ctx),
        Commands::Shell => handlers::shell::execute(&ctx).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before parsing so clap sees them
    dotenvy::dotenv().ok();
    if let Ok(path) = env_file_path() {
        dotenvy::from_path(path).ok();
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code_for(&e));
    }
}
