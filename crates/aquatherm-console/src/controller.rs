use std::sync::Arc;

use aquatherm_core::error::ErrorInfo;
use aquatherm_core::models::{AnalysisResult, SourceMode};
use aquatherm_core::ports::AnalysisService;
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::reducer::{reduce, Dispatch, Disposition, Event};
use crate::state::ConsoleState;
use crate::view::ConsoleView;

/// Outcome of one dispatched request, tagged with its generation
struct Completion {
    generation: u64,
    outcome: Result<AnalysisResult, ErrorInfo>,
}

/// Drives the console against an analysis service.
///
/// Requests run concurrently and are never cancelled; a superseded request
/// still completes and is discarded by generation. All state changes go
/// through [`reduce`] on the caller's task.
pub struct Controller<S> {
    state: ConsoleState,
    service: Arc<S>,
    in_flight: FuturesUnordered<BoxFuture<'static, Completion>>,
}

impl<S> Controller<S>
where
    S: AnalysisService + 'static,
{
    pub fn new(service: S) -> Self {
        Self::with_state(service, ConsoleState::default())
    }

    pub fn with_state(service: S, state: ConsoleState) -> Self {
        Self { state, service: Arc::new(service), in_flight: FuturesUnordered::new() }
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn view(&self) -> ConsoleView {
        ConsoleView::derive(&self.state)
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Requests still awaiting a response, superseded ones included
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn select_source(&mut self, mode: SourceMode) -> Disposition {
        self.apply(Event::SelectSource(mode))
    }

    pub fn set_file(&mut self, file: Vec<u8>, filename: impl Into<String>) -> Disposition {
        self.apply(Event::SetFile { file, filename: filename.into() })
    }

    /// # Panics
    /// Panics if `percent > 100`.
    pub fn set_simulation_percent(&mut self, percent: u8) -> Disposition {
        self.apply(Event::SetSimulationPercent(percent))
    }

    /// Start a live analysis; returns its generation
    pub fn run_analysis(&mut self) -> u64 {
        self.start(Event::RunAnalysis)
    }

    /// Start a simulation at the current slider value; returns its generation
    pub fn commit_simulation(&mut self) -> u64 {
        self.start(Event::CommitSimulation)
    }

    /// Wait for the next response and apply it.
    ///
    /// Returns `None` when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Disposition> {
        let completion = self.in_flight.next().await?;
        let disposition = self.apply(Event::Completed {
            generation: completion.generation,
            outcome: completion.outcome,
            received_at: chrono::Utc::now(),
        });

        match disposition {
            Disposition::Discarded { generation, latest } => {
                tracing::debug!(generation, latest, "Discarded stale analysis response");
            }
            _ => {
                tracing::info!(
                    generation = completion.generation,
                    state = self.state.ui().name(),
                    "Analysis completed"
                );
            }
        }

        Some(disposition)
    }

    /// Drain every in-flight request
    pub async fn settle(&mut self) -> Vec<Disposition> {
        let mut dispositions = Vec::new();
        while let Some(disposition) = self.next_completion().await {
            dispositions.push(disposition);
        }
        dispositions
    }

    fn start(&mut self, event: Event) -> u64 {
        let step = reduce(std::mem::take(&mut self.state), event);
        self.state = step.state;

        match step.effect {
            Some(dispatch) => {
                let generation = dispatch.generation;
                self.dispatch(dispatch);
                generation
            }
            None => self.state.latest_generation(),
        }
    }

    fn dispatch(&mut self, dispatch: Dispatch) {
        let Dispatch { generation, request } = dispatch;

        tracing::debug!(
            generation,
            simulation = request.is_simulation(),
            use_satellite = request.use_satellite(),
            in_flight = self.in_flight.len(),
            "Dispatching analysis request"
        );

        let service = Arc::clone(&self.service);
        self.in_flight.push(Box::pin(async move {
            let outcome = service.analyze(request).await;
            Completion { generation, outcome }
        }));
    }

    fn apply(&mut self, event: Event) -> Disposition {
        let step = reduce(std::mem::take(&mut self.state), event);
        self.state = step.state;

        if let Disposition::Rejected(rejection) = step.disposition {
            tracing::debug!(%rejection, "Ignored console intent");
        }

        step.disposition
    }
}
