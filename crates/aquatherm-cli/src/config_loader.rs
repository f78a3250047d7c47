use anyhow::Result;
use aquatherm_core::config::{CliConfigOverrides, LayeredConfig};

use crate::cli::Cli;

/// Resolve configuration: defaults, then file, then environment, then flags
pub fn load(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(ref path) = cli.config {
        config = config.load_from_file(path)?;
    }

    let mut config = config.load_from_env();

    config.update_from_cli(CliConfigOverrides {
        api_base_url: cli.api_url.clone(),
        timeout_secs: cli.timeout,
        lat: cli.lat,
        lng: cli.lng,
    })?;

    Ok(config)
}
