//! AquaThermX CLI - Terminal console for urban heat and plastic analysis

mod cli;
mod commands;
mod config_loader;
mod dry_run;
mod errors;
mod output;
mod progress;
mod render;
mod session;

use clap::Parser;
use cli::Cli;
use console::style;
use errors::CliError;

fn main() {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = tokio::runtime::Runtime::new()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(commands::execute(cli)));

    if let Err(err) = result {
        match err.downcast_ref::<CliError>() {
            Some(cli_error) => cli_error.display(),
            None => eprintln!("{} {:#}", style("✗").red().bold(), err),
        }
        std::process::exit(1);
    }
}
