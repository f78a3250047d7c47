//! Analyze command implementation

use crate::cli::AnalyzeArgs;
use crate::dry_run::{self, PlannedRequest};
use crate::output::OutputWriter;
use crate::render;
use crate::session::Session;
use anyhow::Result;
use aquatherm_core::config::LayeredConfig;
use aquatherm_core::request;

pub async fn execute(
    args: AnalyzeArgs,
    config: &LayeredConfig,
    output: &OutputWriter,
    dry_run: bool,
) -> Result<()> {
    let mut session = Session::open(config)?;
    if let Some(ref path) = args.file {
        session.attach(path)?;
    }

    if dry_run {
        let state = session.controller.state();
        let request = request::build(state.coordinate(), state.source(), 0, false);
        return dry_run::display_planned_requests(
            output,
            &[PlannedRequest::new(session.endpoint(), &request)],
        );
    }

    session.controller.run_analysis();
    session.settle(output, "Analyzing location...").await;

    let view = session.controller.view();
    session.ensure_loaded(&view)?;

    if output.is_json() {
        output.result(serde_json::json!({
            "view": view,
            "map": view.map.to_feature_collection(),
        }))?;
    } else {
        render::console_view(output, &view);
    }

    Ok(())
}
