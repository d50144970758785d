mod cli;
mod commands;
mod config;
mod infra;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

/// Log to stderr so issue output on stdout stays machine-readable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let Cli { command } = Cli::parse();

    match command {
        Commands::Create(args) => commands::create::run(&args).await?,
        Commands::Info(args) => commands::info::run(&args).await?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "li", &mut std::io::stdout());
        }
    }

    Ok(())
}
