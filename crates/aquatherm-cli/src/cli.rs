use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AquaThermX - Urban heat and plastic analysis console
#[derive(Parser, Debug)]
#[command(name = "aquatherm")]
#[command(about = "Urban heat and plastic analysis console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Show the request that would be sent without sending it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Analysis API base URL (e.g., http://localhost:8000/api)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Latitude of the analysed location
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of the analysed location
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub lng: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a live analysis of the current location
    Analyze(AnalyzeArgs),

    /// Run a live baseline, then project a plastic cleanup
    Simulate(SimulateArgs),

    /// Commit several cleanup projections back to back
    Sweep(SweepArgs),

    /// Show effective configuration and where each value came from
    Config,

    /// Resolve a dashboard path to its screen
    Route(RouteArgs),
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Analyse an uploaded drone or satellite image instead of the live feed
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Percentage of plastic removed (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub percent: u8,

    /// Analyse an uploaded image instead of the live feed
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SweepArgs {
    /// Cleanup percentages, committed in order
    #[arg(
        long = "percent",
        required = true,
        num_args = 1..,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub percents: Vec<u8>,
}

#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// URL path (e.g., /console)
    pub path: String,
}
