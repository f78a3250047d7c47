//! AquaThermX Console - Analysis orchestration
//!
//! Owns the console state machine: operator intents go in, analysis requests
//! come out, and responses are applied only if they belong to the most recent
//! request.

pub mod controller;
pub mod reducer;
pub mod state;
pub mod view;

pub use controller::Controller;
pub use reducer::{reduce, Dispatch, Disposition, Event, Rejection, Step};
pub use state::{ConsoleState, PendingAnalysis, UiState};
pub use view::ConsoleView;
