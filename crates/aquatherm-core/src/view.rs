//! Render-ready projection of an analysis result
//!
//! Each optional response group maps to an optional panel. A missing group
//! yields no panel, never an error.

use serde::Serialize;

use crate::models::{AnalysisResult, Confidence, Indices, SensorReadings, SentinelMetadata};

/// Scores strictly above this are critical
pub const CRITICAL_THRESHOLD: f64 = 7.0;

/// Scores strictly above this (and not critical) are moderate
pub const MODERATE_THRESHOLD: f64 = 4.0;

/// Confidence scores strictly above this get the high-reliability badge
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;

const LIVE_EXPLANATION: &str =
    "Primary driver: Water Deficit. Plastic density is amplifying local heat retention by approx 15%.";

/// Heat score classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Critical,
    Moderate,
    Safe,
}

impl ScoreBand {
    pub fn classify(heat_score: f64) -> Self {
        if heat_score > CRITICAL_THRESHOLD {
            ScoreBand::Critical
        } else if heat_score > MODERATE_THRESHOLD {
            ScoreBand::Moderate
        } else {
            ScoreBand::Safe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Critical => "Critical Risk",
            ScoreBand::Moderate => "Moderate Warning",
            ScoreBand::Safe => "Safe Levels",
        }
    }
}

/// Narrative shown under the score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Explanation {
    Live,
    Simulation { percent: u8 },
}

impl Explanation {
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            Explanation::Live => None,
            Explanation::Simulation { .. } => Some("SIMULATION ACTIVE"),
        }
    }

    pub fn text(&self) -> String {
        match self {
            Explanation::Live => LIVE_EXPLANATION.to_string(),
            Explanation::Simulation { percent } => format!(
                "Reducing plastic by {}% has lowered surface absorption, projecting a significant drop in heat retention.",
                percent
            ),
        }
    }
}

/// Headline numbers overlaid on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayStats {
    pub detection_count: u32,
    pub surface_temp_c: f64,
    pub population_density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorRow {
    pub label: &'static str,
    pub value: f64,
    /// Bar fill, `min(value * 10, 100)`
    pub bar_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorPanel {
    pub rows: Vec<FactorRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceBadge {
    pub level: String,
    pub reliability_percent: u32,
    pub is_high: bool,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorPanel {
    pub ambient_temp_c: f64,
    pub humidity_percent: f64,
    pub pm25_level: f64,
    pub is_calibrated: bool,
    pub device_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentinelPanel {
    pub provider: String,
    pub resolution: String,
    pub cloud_cover: String,
    pub acquisition_date: String,
}

/// Everything the score, overlay and intelligence panels render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub heat_score: f64,
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub intervention: String,
    pub explanation: Explanation,
    pub overlay: OverlayStats,
    pub factors: Option<FactorPanel>,
    pub confidence: Option<ConfidenceBadge>,
    pub sensors: Option<SensorPanel>,
    pub sentinel: Option<SentinelPanel>,
    pub is_simulation: bool,
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let band = ScoreBand::classify(result.heat_score);

        let explanation = match (result.is_simulation, result.simulation_percent) {
            (true, Some(percent)) => Explanation::Simulation { percent },
            (true, None) => Explanation::Simulation { percent: 0 },
            (false, _) => Explanation::Live,
        };

        Self {
            heat_score: result.heat_score,
            band,
            band_label: band.label(),
            intervention: result.intervention_suggestion.clone(),
            explanation,
            overlay: OverlayStats {
                detection_count: result.plastic_analysis.count,
                surface_temp_c: result.environmental_data.surface_temp_c,
                population_density: result.environmental_data.population_density,
            },
            factors: result.indices.as_ref().map(factor_panel),
            confidence: result.confidence.as_ref().map(confidence_badge),
            sensors: result.sensor_readings.as_ref().map(sensor_panel),
            sentinel: result.sentinel_metadata.as_ref().map(sentinel_panel),
            is_simulation: result.is_simulation,
        }
    }
}

fn factor_panel(indices: &Indices) -> FactorPanel {
    let row = |label, value: f64| FactorRow { label, value, bar_percent: (value * 10.0).min(100.0) };

    FactorPanel {
        rows: vec![
            row("Plastic Density", indices.pdi),
            row("Surface Heat", indices.sai),
            row("Water Deficit", indices.wdi),
        ],
    }
}

fn confidence_badge(confidence: &Confidence) -> ConfidenceBadge {
    ConfidenceBadge {
        level: confidence.level.clone(),
        reliability_percent: (confidence.score * 100.0).round() as u32,
        is_high: confidence.score > HIGH_CONFIDENCE_THRESHOLD,
        reasons: confidence.reasons.clone(),
    }
}

fn sensor_panel(readings: &SensorReadings) -> SensorPanel {
    SensorPanel {
        ambient_temp_c: readings.ambient_temp_c,
        humidity_percent: readings.humidity_percent,
        pm25_level: readings.pm25_level,
        is_calibrated: readings.is_calibrated,
        device_count: readings.device_count,
    }
}

fn sentinel_panel(metadata: &SentinelMetadata) -> SentinelPanel {
    SentinelPanel {
        provider: metadata.provider.clone(),
        resolution: metadata.resolution.clone(),
        cloud_cover: metadata.cloud_cover.clone(),
        acquisition_date: metadata.acquisition_date.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, EnvironmentalData, PlasticAnalysis};

    fn minimal(heat_score: f64) -> AnalysisResult {
        AnalysisResult {
            heat_score,
            intervention_suggestion: "No immediate action required".to_string(),
            location: Coordinate::MUMBAI,
            plastic_analysis: PlasticAnalysis { count: 3, density_score: 0.1 },
            environmental_data: EnvironmentalData {
                surface_temp_c: 35.0,
                population_density: 1800.0,
            },
            indices: None,
            confidence: None,
            sentinel_metadata: None,
            sensor_readings: None,
            is_simulation: false,
            simulation_percent: None,
        }
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::classify(8.2), ScoreBand::Critical);
        assert_eq!(ScoreBand::classify(7.01), ScoreBand::Critical);
        assert_eq!(ScoreBand::classify(7.0), ScoreBand::Moderate);
        assert_eq!(ScoreBand::classify(4.01), ScoreBand::Moderate);
        assert_eq!(ScoreBand::classify(4.0), ScoreBand::Safe);
        assert_eq!(ScoreBand::classify(0.0), ScoreBand::Safe);
    }

    #[test]
    fn test_required_only_view_has_no_optional_panels() {
        let view = ResultView::from_result(&minimal(8.2));

        assert_eq!(view.band_label, "Critical Risk");
        assert!(view.factors.is_none());
        assert!(view.confidence.is_none());
        assert!(view.sensors.is_none());
        assert!(view.sentinel.is_none());
        assert_eq!(view.explanation, Explanation::Live);
        assert_eq!(view.overlay.detection_count, 3);
    }

    #[test]
    fn test_factor_bars_are_capped() {
        let mut result = minimal(5.0);
        result.indices = Some(Indices { pdi: 4.2, sai: 12.0, wdi: 0.0 });

        let factors = ResultView::from_result(&result).factors.unwrap();
        assert_eq!(factors.rows[0].label, "Plastic Density");
        assert!((factors.rows[0].bar_percent - 42.0).abs() < 1e-9);
        assert_eq!(factors.rows[1].bar_percent, 100.0);
        assert_eq!(factors.rows[2].bar_percent, 0.0);
    }

    #[test]
    fn test_confidence_badge() {
        let mut result = minimal(5.0);
        result.confidence = Some(Confidence {
            score: 0.87,
            reasons: vec!["Source: Sentinel-2 L2A (Verified)".to_string()],
            level: "High".to_string(),
        });

        let badge = ResultView::from_result(&result).confidence.unwrap();
        assert_eq!(badge.reliability_percent, 87);
        assert!(badge.is_high);

        result.confidence.as_mut().unwrap().score = 0.8;
        assert!(!ResultView::from_result(&result).confidence.unwrap().is_high);
    }

    #[test]
    fn test_simulation_explanation_uses_stamped_percent() {
        let result = minimal(3.1).stamp(Some(40));
        let view = ResultView::from_result(&result);

        assert!(view.is_simulation);
        assert_eq!(view.explanation, Explanation::Simulation { percent: 40 });
        assert_eq!(view.explanation.headline(), Some("SIMULATION ACTIVE"));
        assert!(view.explanation.text().contains("Reducing plastic by 40%"));
    }
}
