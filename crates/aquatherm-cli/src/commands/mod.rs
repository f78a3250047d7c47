//! Command implementations

mod analyze;
mod config;
mod route;
mod simulate;
mod sweep;

use crate::cli::{Cli, Commands};
use crate::config_loader;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = config_loader::load(&cli)?;

    match cli.command {
        Commands::Analyze(args) => analyze::execute(args, &config, &output, cli.dry_run).await,
        Commands::Simulate(args) => simulate::execute(args, &config, &output, cli.dry_run).await,
        Commands::Sweep(args) => sweep::execute(args, &config, &output, cli.dry_run).await,
        Commands::Config => config::execute(&config, &output),
        Commands::Route(args) => route::execute(args, &output),
    }
}
