//! Sweep command implementation
//!
//! Commits several projections without waiting in between. Only the last one
//! committed is shown; the rest complete and are discarded.

use crate::cli::SweepArgs;
use crate::dry_run::{self, PlannedRequest};
use crate::output::OutputWriter;
use crate::render;
use crate::session::Session;
use anyhow::Result;
use aquatherm_console::Disposition;
use aquatherm_core::config::LayeredConfig;
use aquatherm_core::request;
use serde::Serialize;
use tabled::Tabled;

#[derive(Debug, Serialize, Tabled)]
struct CommitRow {
    #[tabled(rename = "Generation")]
    generation: u64,
    #[tabled(rename = "Percent")]
    percent: u8,
    #[tabled(rename = "Outcome")]
    outcome: &'static str,
}

pub async fn execute(
    args: SweepArgs,
    config: &LayeredConfig,
    output: &OutputWriter,
    dry_run: bool,
) -> Result<()> {
    let mut session = Session::open(config)?;

    if dry_run {
        let state = session.controller.state();
        let planned: Vec<PlannedRequest> = args
            .percents
            .iter()
            .map(|&percent| {
                let request = request::build(state.coordinate(), state.source(), percent, true);
                PlannedRequest::new(session.endpoint(), &request)
            })
            .collect();
        return dry_run::display_planned_requests(output, &planned);
    }

    if args.percents.len() == 1 {
        output.warning("A single-step sweep behaves like simulate without a baseline");
    }

    let commits: Vec<(u64, u8)> = args
        .percents
        .iter()
        .map(|&percent| {
            session.controller.set_simulation_percent(percent);
            (session.controller.commit_simulation(), percent)
        })
        .collect();

    tracing::info!(committed = commits.len(), "Sweep committed");

    let dispositions = session.settle(output, "Running projections...").await;
    let discarded: Vec<u64> = dispositions
        .iter()
        .filter_map(|d| match d {
            Disposition::Discarded { generation, .. } => Some(*generation),
            _ => None,
        })
        .collect();

    let rows: Vec<CommitRow> = commits
        .into_iter()
        .map(|(generation, percent)| CommitRow {
            generation,
            percent,
            outcome: if discarded.contains(&generation) { "superseded" } else { "shown" },
        })
        .collect();

    let view = session.controller.view();
    session.ensure_loaded(&view)?;

    if output.is_json() {
        output.result(serde_json::json!({
            "commits": rows,
            "view": view,
        }))?;
    } else {
        output.section("Committed Projections");
        output.table(rows);
        render::console_view(output, &view);
    }

    Ok(())
}
