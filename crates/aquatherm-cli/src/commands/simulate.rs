//! Simulate command implementation

use crate::cli::SimulateArgs;
use crate::dry_run::{self, PlannedRequest};
use crate::output::OutputWriter;
use crate::render;
use crate::session::Session;
use anyhow::Result;
use aquatherm_console::view::ConsoleView;
use aquatherm_core::config::LayeredConfig;
use aquatherm_core::request;
use tabled::Tabled;

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Baseline")]
    baseline: String,
    #[tabled(rename = "Projected")]
    projected: String,
}

pub async fn execute(
    args: SimulateArgs,
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
        let baseline = request::build(state.coordinate(), state.source(), 0, false);
        let projected = request::build(state.coordinate(), state.source(), args.percent, true);
        return dry_run::display_planned_requests(
            output,
            &[
                PlannedRequest::new(session.endpoint(), &baseline),
                PlannedRequest::new(session.endpoint(), &projected),
            ],
        );
    }

    session.controller.run_analysis();
    session.settle(output, "Analyzing baseline...").await;
    let baseline = session.controller.view();
    session.ensure_loaded(&baseline)?;

    session.controller.set_simulation_percent(args.percent);
    session.controller.commit_simulation();
    session
        .settle(output, &format!("Projecting {}% plastic removal...", args.percent))
        .await;
    let projected = session.controller.view();
    session.ensure_loaded(&projected)?;

    if output.is_json() {
        output.result(serde_json::json!({
            "percent": args.percent,
            "baseline": baseline,
            "simulation": projected,
        }))?;
    } else {
        render::console_view(output, &projected);
        output.section("Baseline vs Projection");
        output.table(comparison(&baseline, &projected));
    }

    Ok(())
}

fn comparison(baseline: &ConsoleView, projected: &ConsoleView) -> Vec<ComparisonRow> {
    let (Some(before), Some(after)) = (&baseline.result, &projected.result) else {
        return Vec::new();
    };

    vec![
        ComparisonRow {
            metric: "Heat Score",
            baseline: format!("{:.1}", before.heat_score),
            projected: format!("{:.1}", after.heat_score),
        },
        ComparisonRow {
            metric: "Risk",
            baseline: before.band_label.to_string(),
            projected: after.band_label.to_string(),
        },
        ComparisonRow {
            metric: "Detections",
            baseline: before.overlay.detection_count.to_string(),
            projected: after.overlay.detection_count.to_string(),
        },
        ComparisonRow {
            metric: "Surface Temp",
            baseline: format!("{:.1}°C", before.overlay.surface_temp_c),
            projected: format!("{:.1}°C", after.overlay.surface_temp_c),
        },
    ]
}
