//! Terminal rendering of the console view

use aquatherm_console::view::{ConsoleView, Status};
use aquatherm_core::map::MapView;
use aquatherm_core::ports::MapSurface;
use aquatherm_core::view::{ResultView, ScoreBand};
use console::style;
use tabled::Tabled;

use crate::output::OutputWriter;

/// Map capability drawn as text
pub struct TerminalMap<'a> {
    output: &'a OutputWriter,
}

impl<'a> TerminalMap<'a> {
    pub fn new(output: &'a OutputWriter) -> Self {
        Self { output }
    }
}

impl MapSurface for TerminalMap<'_> {
    fn show(&mut self, view: &MapView) {
        #[derive(Tabled)]
        struct MarkerRow {
            #[tabled(rename = "Marker")]
            title: String,
            #[tabled(rename = "Lat")]
            lat: String,
            #[tabled(rename = "Lng")]
            lng: String,
        }

        self.output.section("Map");
        self.output.kv(
            "Center",
            format!("{:.4}, {:.4} (zoom {})", view.center.lat, view.center.lng, view.zoom),
        );

        if !view.markers.is_empty() {
            let rows = view
                .markers
                .iter()
                .map(|m| MarkerRow {
                    title: m.title.clone(),
                    lat: format!("{:.4}", m.lat),
                    lng: format!("{:.4}", m.lng),
                })
                .collect();
            self.output.table(rows);
        }
    }
}

/// Render the full console view
pub fn console_view(output: &OutputWriter, view: &ConsoleView) {
    if let Some(ref feed) = view.live_feed {
        let acquired = feed.acquisition_date.as_deref().unwrap_or("awaiting first pass");
        output.kv("Live Feed", format!("{} ({})", feed.provider, acquired));
    } else if let Some(ref filename) = view.source.filename {
        output.kv("Source", format!("upload: {}", filename));
    }

    match view.status {
        Status::Idle => output.info("No analysis yet"),
        Status::Loading => output.info("Analysis in progress"),
        Status::Loaded | Status::Failed => {}
    }

    if let Some(ref result) = view.result {
        result_view(output, result);
    }

    if let Some(ref failure) = view.failure {
        output.error(format!("{}: {}", failure.title, failure.message));
    }

    TerminalMap::new(output).show(&view.map);

    if let Some(ref updated) = view.last_updated {
        output.kv("Last Updated", updated.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    if let Some(control) = view.simulation {
        output.info(format!(
            "Project a cleanup with: aquatherm simulate --percent <{}-{}, step {}>",
            control.min, control.max, control.step
        ));
    }
}

fn result_view(output: &OutputWriter, result: &ResultView) {
    output.section(if result.is_simulation { "Projected Heat Risk" } else { "Heat Risk" });
    output.kv("Heat Score", format!("{:.1} {}", result.heat_score, band_label(result)));

    if let Some(headline) = result.explanation.headline() {
        output.kv("Mode", style(headline).magenta().bold());
    }
    output.kv("Explanation", result.explanation.text());
    output.kv("Intervention", &result.intervention);

    output.section("Overlay");
    output.kv("Detections", result.overlay.detection_count);
    output.kv("Surface Temp", format!("{:.1}°C", result.overlay.surface_temp_c));
    output.kv("Population Density", format!("{:.0}/km²", result.overlay.population_density));

    if let Some(ref factors) = result.factors {
        #[derive(Tabled)]
        struct FactorLine {
            #[tabled(rename = "Factor")]
            label: &'static str,
            #[tabled(rename = "Index")]
            value: String,
            #[tabled(rename = "Weight")]
            bar: String,
        }

        output.section("Causal Factors");
        let rows = factors
            .rows
            .iter()
            .map(|row| FactorLine {
                label: row.label,
                value: format!("{:.1}", row.value),
                bar: bar(row.bar_percent),
            })
            .collect();
        output.table(rows);
    }

    if let Some(ref confidence) = result.confidence {
        output.section("Confidence");
        let level = if confidence.is_high {
            style(&confidence.level).green().bold()
        } else {
            style(&confidence.level).yellow().bold()
        };
        output.kv("Level", format!("{} ({}% reliability)", level, confidence.reliability_percent));
        for reason in &confidence.reasons {
            output.kv("  Reason", reason);
        }
    }

    if let Some(ref sensors) = result.sensors {
        output.section("Ground Sensors");
        output.kv("Ambient Temp", format!("{:.1}°C", sensors.ambient_temp_c));
        output.kv("Humidity", format!("{:.0}%", sensors.humidity_percent));
        output.kv("PM2.5", format!("{:.1}", sensors.pm25_level));
        output.kv("Calibrated", if sensors.is_calibrated { "yes" } else { "no" });
        if let Some(devices) = sensors.device_count {
            output.kv("Devices", devices);
        }
    }

    if let Some(ref sentinel) = result.sentinel {
        output.section("Satellite Source");
        output.kv("Provider", &sentinel.provider);
        output.kv("Resolution", &sentinel.resolution);
        output.kv("Cloud Cover", &sentinel.cloud_cover);
        output.kv("Acquired", &sentinel.acquisition_date);
    }
}

fn band_label(result: &ResultView) -> String {
    let label = style(result.band_label);
    match result.band {
        ScoreBand::Critical => label.red().bold().to_string(),
        ScoreBand::Moderate => label.yellow().bold().to_string(),
        ScoreBand::Safe => label.green().bold().to_string(),
    }
}

/// Text bar, 20 cells wide
fn bar(percent: f64) -> String {
    let filled = ((percent / 5.0).round() as usize).min(20);
    format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled))
}
