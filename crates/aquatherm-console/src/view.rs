//! Console view model
//!
//! A flat, serializable snapshot of everything the presentation layer draws.
//! Derived from [`ConsoleState`] on demand and never stored.

use aquatherm_core::error::ErrorKind;
use aquatherm_core::map::MapView;
use aquatherm_core::models::simulation::{MAX_PERCENT, PERCENT_STEP};
use aquatherm_core::models::SourceMode;
use aquatherm_core::view::ResultView;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::{ConsoleState, UiState};

/// Provider shown on the live feed before any metadata arrives
pub const DEFAULT_FEED_PROVIDER: &str = "Copernicus Sentinel-2";

/// Marker title for the analysed location
pub const TARGET_MARKER_TITLE: &str = "Target";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Source selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceView {
    pub mode: SourceMode,
    pub filename: Option<String>,
    /// Upload selected but no file chosen; analysis will use satellite data
    pub awaiting_file: bool,
}

/// Live satellite feed indicator, shown in satellite mode only
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveFeedView {
    pub provider: String,
    pub acquisition_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureView {
    pub kind: ErrorKind,
    pub title: &'static str,
    pub message: String,
    /// Retrying or fixing the input can help
    pub user_recoverable: bool,
}

/// Remediation slider, offered once a result is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationControl {
    pub percent: u8,
    pub min: u8,
    pub max: u8,
    pub step: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsoleView {
    pub status: Status,
    pub is_loading: bool,
    /// Pending request is a simulation
    pub is_simulating: bool,
    pub source: SourceView,
    pub live_feed: Option<LiveFeedView>,
    pub result: Option<ResultView>,
    pub failure: Option<FailureView>,
    pub simulation: Option<SimulationControl>,
    pub map: MapView,
    pub last_updated: Option<DateTime<Utc>>,
}

impl ConsoleView {
    pub fn derive(state: &ConsoleState) -> Self {
        let ui = state.ui();
        let status = match ui {
            UiState::Idle => Status::Idle,
            UiState::Loading(_) => Status::Loading,
            UiState::Loaded(_) => Status::Loaded,
            UiState::Failed(_) => Status::Failed,
        };

        let source = state.source();
        let source_view = SourceView {
            mode: source.mode(),
            filename: source.filename().map(str::to_string),
            awaiting_file: source.mode() == SourceMode::Upload && !source.has_file(),
        };

        let live_feed = (source.mode() == SourceMode::Satellite).then(|| {
            let metadata = ui.result().and_then(|result| result.sentinel_metadata.as_ref());
            LiveFeedView {
                provider: metadata
                    .map(|m| m.provider.clone())
                    .unwrap_or_else(|| DEFAULT_FEED_PROVIDER.to_string()),
                acquisition_date: metadata.map(|m| m.acquisition_date.clone()),
            }
        });

        // Target sits on the session coordinate
        let mut map = MapView::new(state.coordinate(), state.zoom());
        if ui.result().is_some() {
            map = map.with_marker(state.coordinate(), TARGET_MARKER_TITLE);
        }

        Self {
            status,
            is_loading: ui.is_loading(),
            is_simulating: matches!(ui, UiState::Loading(pending) if pending.is_simulation()),
            source: source_view,
            live_feed,
            result: ui.result().map(ResultView::from_result),
            failure: ui.error().map(|error| FailureView {
                kind: error.kind,
                title: failure_title(error.kind),
                message: error.message.clone(),
                user_recoverable: error.kind.is_user_recoverable(),
            }),
            simulation: ui.result().map(|_| SimulationControl {
                percent: state.simulation_percent(),
                min: 0,
                max: MAX_PERCENT,
                step: PERCENT_STEP,
            }),
            map,
            last_updated: state.last_updated(),
        }
    }
}

fn failure_title(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Transport => "Analysis service unreachable",
        ErrorKind::ServerRejected => "Analysis rejected",
        ErrorKind::MalformedResponse => "Unexpected response from analysis service",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::{reduce, Event};
    use aquatherm_core::error::ErrorInfo;
    use aquatherm_core::models::{
        AnalysisResult, Coordinate, EnvironmentalData, PlasticAnalysis, SentinelMetadata,
    };

    fn loaded_state(result: AnalysisResult, events: Vec<Event>) -> ConsoleState {
        let mut state = ConsoleState::default();
        for event in events {
            state = reduce(state, event).state;
        }
        let step = reduce(state, Event::RunAnalysis);
        let generation = step.effect.unwrap().generation;
        reduce(
            step.state,
            Event::Completed { generation, outcome: Ok(result), received_at: Utc::now() },
        )
        .state
    }

    fn result() -> AnalysisResult {
        AnalysisResult {
            heat_score: 7.4,
            intervention_suggestion: "Deploy trash booms".to_string(),
            location: Coordinate::new(19.08, 72.88).unwrap(),
            plastic_analysis: PlasticAnalysis { count: 14, density_score: 0.5 },
            environmental_data: EnvironmentalData {
                surface_temp_c: 36.1,
                population_density: 2900.0,
            },
            indices: None,
            confidence: None,
            sentinel_metadata: Some(SentinelMetadata {
                provider: "Copernicus Sentinel-2".to_string(),
                resolution: "10m".to_string(),
                cloud_cover: "4%".to_string(),
                acquisition_date: "2025-02-01".to_string(),
                band_info: None,
            }),
            sensor_readings: None,
            is_simulation: false,
            simulation_percent: None,
        }
    }

    #[test]
    fn test_idle_view() {
        let view = ConsoleView::derive(&ConsoleState::default());

        assert_eq!(view.status, Status::Idle);
        assert!(view.result.is_none());
        assert!(view.simulation.is_none());
        assert!(view.map.markers.is_empty());
        assert_eq!(view.map.zoom, 12);
        let feed = view.live_feed.unwrap();
        assert_eq!(feed.provider, DEFAULT_FEED_PROVIDER);
        assert!(feed.acquisition_date.is_none());
    }

    #[test]
    fn test_loaded_view_offers_slider_and_marker() {
        let state = loaded_state(result(), vec![Event::SetSimulationPercent(30)]);
        let view = ConsoleView::derive(&state);

        assert_eq!(view.status, Status::Loaded);
        assert_eq!(view.result.unwrap().band_label, "Critical Risk");
        assert_eq!(
            view.simulation,
            Some(SimulationControl { percent: 30, min: 0, max: 100, step: 10 })
        );
        assert_eq!(view.map.markers.len(), 1);
        assert_eq!(view.map.markers[0].title, TARGET_MARKER_TITLE);
        // Result location differs from the session; the marker stays on the session
        assert_eq!(view.map.markers[0].lat, Coordinate::MUMBAI.lat);
        assert_eq!(view.map.markers[0].lng, Coordinate::MUMBAI.lng);
        assert_eq!(view.live_feed.unwrap().acquisition_date.as_deref(), Some("2025-02-01"));
        assert!(view.last_updated.is_some());
    }

    #[test]
    fn test_upload_mode_hides_live_feed() {
        let state = reduce(
            ConsoleState::default(),
            Event::SelectSource(SourceMode::Upload),
        )
        .state;
        let view = ConsoleView::derive(&state);

        assert!(view.live_feed.is_none());
        assert!(view.source.awaiting_file);
        assert!(view.source.filename.is_none());
    }

    #[test]
    fn test_loading_view_tracks_simulation() {
        let state = loaded_state(result(), vec![]);
        let state = reduce(state, Event::SetSimulationPercent(50)).state;
        let state = reduce(state, Event::CommitSimulation).state;
        let view = ConsoleView::derive(&state);

        assert!(view.is_loading);
        assert!(view.is_simulating);
        assert!(view.result.is_none());
        assert!(view.simulation.is_none());
    }

    #[test]
    fn test_failure_view_titles_differ_by_kind() {
        let fail = |error: ErrorInfo| {
            let step = reduce(ConsoleState::default(), Event::RunAnalysis);
            let state = reduce(
                step.state,
                Event::Completed { generation: 1, outcome: Err(error), received_at: Utc::now() },
            )
            .state;
            ConsoleView::derive(&state).failure.unwrap()
        };

        let transport = fail(ErrorInfo::transport("connection refused"));
        let rejected = fail(ErrorInfo::server_rejected("bad coordinate"));
        let malformed = fail(ErrorInfo::malformed("missing heat_score"));

        assert_ne!(transport.title, rejected.title);
        assert_ne!(rejected.title, malformed.title);
        assert_eq!(rejected.message, "bad coordinate");
        assert!(transport.user_recoverable);
        assert!(!malformed.user_recoverable);
    }
}
