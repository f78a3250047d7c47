use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Analysis response envelope.
///
/// The core fields are required. Each extension group is independently
/// optional; a missing group or an explicit `null` deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Urban risk index, 0 to 10
    pub heat_score: f64,

    pub intervention_suggestion: String,

    pub location: Coordinate,

    pub plastic_analysis: PlasticAnalysis,

    pub environmental_data: EnvironmentalData,

    #[serde(default)]
    pub indices: Option<Indices>,

    #[serde(default)]
    pub confidence: Option<Confidence>,

    #[serde(default)]
    pub sentinel_metadata: Option<SentinelMetadata>,

    #[serde(default)]
    pub sensor_readings: Option<SensorReadings>,

    /// Stamped by the console from the request that produced this result;
    /// never read from the wire.
    #[serde(skip_deserializing)]
    pub is_simulation: bool,

    /// Slider value of the simulation request, when `is_simulation`
    #[serde(skip_deserializing)]
    pub simulation_percent: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlasticAnalysis {
    pub count: u32,
    pub density_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalData {
    pub surface_temp_c: f64,
    pub population_density: f64,
}

/// Scientific indices behind the heat score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indices {
    /// Plastic density index
    pub pdi: f64,
    /// Surface absorption index
    pub sai: f64,
    /// Water deficit index
    pub wdi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub score: f64,
    pub reasons: Vec<String>,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentinelMetadata {
    pub provider: String,
    pub resolution: String,
    pub cloud_cover: String,
    pub acquisition_date: String,
    #[serde(default)]
    pub band_info: Option<String>,
}

/// Aggregated ground sensor data for the region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReadings {
    pub ambient_temp_c: f64,
    pub humidity_percent: f64,
    pub pm25_level: f64,
    pub is_calibrated: bool,
    #[serde(default)]
    pub device_count: Option<u32>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl AnalysisResult {
    /// Check value constraints serde cannot express.
    ///
    /// Returns a description of the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if !self.heat_score.is_finite() {
            return Err(format!("heat_score must be finite, got {}", self.heat_score));
        }

        if !self.location.is_valid() {
            return Err(format!(
                "location ({}, {}) is outside the valid latitude/longitude range",
                self.location.lat, self.location.lng
            ));
        }

        if let Some(ref confidence) = self.confidence {
            if !(0.0..=1.0).contains(&confidence.score) {
                return Err(format!(
                    "confidence.score must be within [0, 1], got {}",
                    confidence.score
                ));
            }
        }

        Ok(())
    }

    /// Record which request mode produced this result
    pub fn stamp(mut self, simulation_percent: Option<u8>) -> Self {
        self.is_simulation = simulation_percent.is_some();
        self.simulation_percent = simulation_percent;
        self
    }
}
