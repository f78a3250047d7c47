//! Route command implementation

use crate::cli::RouteArgs;
use crate::errors;
use crate::output::OutputWriter;
use anyhow::Result;
use aquatherm_core::routing::Screen;

pub fn execute(args: RouteArgs, output: &OutputWriter) -> Result<()> {
    let screen = Screen::from_path(&args.path).ok_or_else(|| errors::unknown_route(&args.path))?;

    if output.is_json() {
        output.result(serde_json::json!({
            "path": args.path,
            "screen": screen,
            "canonical_path": screen.path(),
        }))?;
    } else {
        output.success(format!("{} resolves to the {:?} screen", args.path, screen));
        output.kv("Canonical Path", screen.path());
        if screen == Screen::Console {
            output.info("Run an analysis with: aquatherm analyze");
        }
    }

    Ok(())
}
