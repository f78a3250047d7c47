use aquatherm_core::config::DEFAULT_ZOOM;
use aquatherm_core::error::ErrorInfo;
use aquatherm_core::models::{AnalysisResult, Coordinate, InputSource};
use chrono::{DateTime, Utc};

/// The analysis request the console is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAnalysis {
    pub generation: u64,
    /// Slider value of a simulation request; `None` for a live analysis
    pub simulation_percent: Option<u8>,
}

impl PendingAnalysis {
    pub fn is_simulation(&self) -> bool {
        self.simulation_percent.is_some()
    }
}

/// Lifecycle of the analysis panel. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading(PendingAnalysis),
    Loaded(AnalysisResult),
    Failed(ErrorInfo),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading(_))
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            UiState::Loaded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            UiState::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading(_) => "loading",
            UiState::Loaded(_) => "loaded",
            UiState::Failed(_) => "failed",
        }
    }
}

/// Everything the console owns. Only the reducer changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleState {
    pub(crate) coordinate: Coordinate,
    pub(crate) zoom: u8,
    pub(crate) source: InputSource,
    pub(crate) simulation_percent: u8,
    /// Highest generation ever issued; never decreases
    pub(crate) latest_generation: u64,
    pub(crate) ui: UiState,
    pub(crate) last_updated: Option<DateTime<Utc>>,
}

impl ConsoleState {
    pub fn new(coordinate: Coordinate, zoom: u8) -> Self {
        Self {
            coordinate,
            zoom,
            source: InputSource::Satellite,
            simulation_percent: 0,
            latest_generation: 0,
            ui: UiState::Idle,
            last_updated: None,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn source(&self) -> &InputSource {
        &self.source
    }

    pub fn simulation_percent(&self) -> u8 {
        self.simulation_percent
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// When the shown result or failure arrived
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new(Coordinate::MUMBAI, DEFAULT_ZOOM)
    }
}
