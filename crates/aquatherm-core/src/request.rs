//! Request building
//!
//! Turns the console's current intent into a transport-ready analysis request.
//! Everything here is a pure transformation.

use serde::Serialize;

use crate::models::simulation::assert_percent;
use crate::models::{Coordinate, InputSource, SimulationIntent};

/// Value of `simulation_mode` for a remediation projection
pub const SIMULATION_MODE_CLEANUP: &str = "cleanup";

/// A fully-resolved analysis request
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub coordinate: Coordinate,

    /// Normalised source: `Upload` only when a named file is attached
    pub source: InputSource,

    /// `None` requests a live (baseline) analysis
    pub simulation: Option<SimulationIntent>,
}

/// Uploaded file carried by a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilePart<'a> {
    pub filename: &'a str,
    pub bytes: &'a [u8],
}

/// One scalar field of the multipart form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub value: String,
}

impl FormField {
    fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self { name, value: value.into() }
    }
}

/// Build an analysis request.
///
/// An upload without a chosen file falls back to satellite mode. When
/// `is_simulation_trigger` is set the request carries the simulation derived
/// from `simulation_percent`.
///
/// # Panics
/// Panics if `simulation_percent > 100`.
pub fn build(
    coordinate: Coordinate,
    source: &InputSource,
    simulation_percent: u8,
    is_simulation_trigger: bool,
) -> AnalysisRequest {
    assert_percent(simulation_percent);

    let source = if source.has_file() { source.clone() } else { InputSource::Satellite };

    let simulation =
        is_simulation_trigger.then(|| SimulationIntent::from_percent(simulation_percent));

    AnalysisRequest { coordinate, source, simulation }
}

impl AnalysisRequest {
    /// Exactly one of `use_satellite()` and `file().is_some()` holds
    pub fn use_satellite(&self) -> bool {
        !self.source.has_file()
    }

    pub fn file(&self) -> Option<FilePart<'_>> {
        match &self.source {
            InputSource::Upload { file, filename } if !filename.is_empty() => {
                Some(FilePart { filename, bytes: file })
            }
            _ => None,
        }
    }

    pub fn is_simulation(&self) -> bool {
        self.simulation.is_some()
    }

    /// Scalar multipart fields, in wire order. The file part is separate.
    pub fn form_fields(&self) -> Vec<FormField> {
        let mut fields = Vec::with_capacity(5);

        fields.push(FormField::new("use_satellite", self.use_satellite().to_string()));

        if let Some(simulation) = self.simulation {
            fields.push(FormField::new("simulation_mode", SIMULATION_MODE_CLEANUP));
            fields.push(FormField::new(
                "simulation_factor",
                format_decimal(simulation.fraction_removed),
            ));
        }

        fields.push(FormField::new("lat", format_decimal(self.coordinate.lat)));
        fields.push(FormField::new("lng", format_decimal(self.coordinate.lng)));

        fields
    }
}

/// Shortest round-trip decimal form (`0.6`, `1`, `19.076`)
pub fn format_decimal(value: f64) -> String {
    format!("{}", value)
}
