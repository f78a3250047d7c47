//! Console state transitions
//!
//! `reduce` is the only place console state changes. It is pure: the caller
//! performs the returned effect and feeds the outcome back as
//! [`Event::Completed`].

use aquatherm_core::error::ErrorInfo;
use aquatherm_core::models::simulation::assert_percent;
use aquatherm_core::models::{AnalysisResult, InputSource, SourceMode};
use aquatherm_core::request::{self, AnalysisRequest};
use chrono::{DateTime, Utc};

use crate::state::{ConsoleState, PendingAnalysis, UiState};

/// Inputs to the console: operator intents and network completions
#[derive(Debug, Clone)]
pub enum Event {
    SelectSource(SourceMode),
    SetFile { file: Vec<u8>, filename: String },
    SetSimulationPercent(u8),
    CommitSimulation,
    RunAnalysis,
    Completed {
        generation: u64,
        outcome: Result<AnalysisResult, ErrorInfo>,
        received_at: DateTime<Utc>,
    },
}

/// Request the caller must send on the console's behalf
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub generation: u64,
    pub request: AnalysisRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `SetFile` while the satellite source is selected
    FileRequiresUploadMode,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::FileRequiresUploadMode => {
                f.write_str("a file can only be chosen while the upload source is selected")
            }
        }
    }
}

/// What happened to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Applied,
    /// The intent is not defined for the current state; nothing changed
    Rejected(Rejection),
    /// A completion for a superseded request; nothing changed
    Discarded { generation: u64, latest: u64 },
}

/// Result of one transition
#[derive(Debug, Clone)]
pub struct Step {
    pub state: ConsoleState,
    pub effect: Option<Dispatch>,
    pub disposition: Disposition,
}

impl Step {
    fn applied(state: ConsoleState) -> Self {
        Self { state, effect: None, disposition: Disposition::Applied }
    }

    fn unchanged(state: ConsoleState, disposition: Disposition) -> Self {
        Self { state, effect: None, disposition }
    }
}

/// Apply one event.
///
/// # Panics
/// Panics on `SetSimulationPercent` above 100.
pub fn reduce(mut state: ConsoleState, event: Event) -> Step {
    match event {
        Event::SelectSource(SourceMode::Satellite) => {
            state.source = InputSource::Satellite;
            Step::applied(state)
        }

        Event::SelectSource(SourceMode::Upload) => {
            if state.source.mode() != SourceMode::Upload {
                state.source = InputSource::empty_upload();
            }
            Step::applied(state)
        }

        Event::SetFile { file, filename } => match state.source.mode() {
            SourceMode::Upload => {
                state.source = InputSource::Upload { file, filename };
                Step::applied(state)
            }
            SourceMode::Satellite => Step::unchanged(
                state,
                Disposition::Rejected(Rejection::FileRequiresUploadMode),
            ),
        },

        Event::SetSimulationPercent(percent) => {
            assert_percent(percent);
            state.simulation_percent = percent;
            Step::applied(state)
        }

        Event::CommitSimulation => start_analysis(state, true),

        Event::RunAnalysis => start_analysis(state, false),

        Event::Completed { generation, outcome, received_at } => {
            let pending = match state.ui {
                UiState::Loading(pending) if pending.generation == generation => pending,
                _ => {
                    let latest = state.latest_generation;
                    return Step::unchanged(state, Disposition::Discarded { generation, latest });
                }
            };

            state.ui = match outcome {
                Ok(result) => UiState::Loaded(result.stamp(pending.simulation_percent)),
                Err(error) => UiState::Failed(error),
            };
            state.last_updated = Some(received_at);
            Step::applied(state)
        }
    }
}

/// Enter `Loading` under a fresh generation, superseding any pending request
fn start_analysis(mut state: ConsoleState, is_simulation: bool) -> Step {
    let request =
        request::build(state.coordinate, &state.source, state.simulation_percent, is_simulation);

    state.latest_generation += 1;
    let generation = state.latest_generation;

    state.ui = UiState::Loading(PendingAnalysis {
        generation,
        simulation_percent: is_simulation.then_some(state.simulation_percent),
    });

    Step {
        state,
        effect: Some(Dispatch { generation, request }),
        disposition: Disposition::Applied,
    }
}
