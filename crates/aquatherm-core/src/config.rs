use crate::error::{AquathermError, Result};
use crate::models::Coordinate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default analysis API base, matching the development server
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Default bound on a single analysis call
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default map zoom for the console
pub const DEFAULT_ZOOM: u8 = 12;

/// Deepest zoom level a web map tile source serves
pub const MAX_ZOOM: u8 = 22;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the console
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub api_base_url: ConfigValue<String>,
    pub timeout_secs: ConfigValue<u64>,
    pub lat: ConfigValue<f64>,
    pub lng: ConfigValue<f64>,
    pub zoom: ConfigValue<u8>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            api_base_url: ConfigValue::new(
                DEFAULT_API_BASE_URL.to_string(),
                ConfigSource::Default,
            ),
            timeout_secs: ConfigValue::new(DEFAULT_TIMEOUT_SECS, ConfigSource::Default),
            lat: ConfigValue::new(Coordinate::MUMBAI.lat, ConfigSource::Default),
            lng: ConfigValue::new(Coordinate::MUMBAI.lng, ConfigSource::Default),
            zoom: ConfigValue::new(DEFAULT_ZOOM, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| AquathermError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| AquathermError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(api_base_url) = file_config.api_base_url {
            self.api_base_url.update(parse_api_base_url(&api_base_url)?, ConfigSource::File);
        }

        if let Some(timeout_secs) = file_config.timeout_secs {
            self.timeout_secs.update(parse_timeout_secs(timeout_secs)?, ConfigSource::File);
        }

        if let Some(lat) = file_config.lat {
            self.lat.update(parse_latitude(lat)?, ConfigSource::File);
        }

        if let Some(lng) = file_config.lng {
            self.lng.update(parse_longitude(lng)?, ConfigSource::File);
        }

        if let Some(zoom) = file_config.zoom {
            self.zoom.update(parse_zoom(zoom)?, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // AQUATHERM_API_URL
        if let Ok(url) = env::var("AQUATHERM_API_URL") {
            match parse_api_base_url(&url) {
                Ok(url) => self.api_base_url.update(url, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid AQUATHERM_API_URL value '{}': expected an http:// or https:// URL",
                    url
                ),
            }
        }

        // AQUATHERM_TIMEOUT_SECS
        if let Ok(timeout_str) = env::var("AQUATHERM_TIMEOUT_SECS") {
            match timeout_str.parse::<u64>().ok().and_then(|t| parse_timeout_secs(t).ok()) {
                Some(timeout) => self.timeout_secs.update(timeout, ConfigSource::Environment),
                None => tracing::warn!(
                    "Invalid AQUATHERM_TIMEOUT_SECS value '{}': expected a positive integer",
                    timeout_str
                ),
            }
        }

        // AQUATHERM_LAT
        if let Ok(lat_str) = env::var("AQUATHERM_LAT") {
            match lat_str.parse::<f64>().ok().and_then(|lat| parse_latitude(lat).ok()) {
                Some(lat) => self.lat.update(lat, ConfigSource::Environment),
                None => tracing::warn!(
                    "Invalid AQUATHERM_LAT value '{}': expected decimal degrees in [-90, 90]",
                    lat_str
                ),
            }
        }

        // AQUATHERM_LNG
        if let Ok(lng_str) = env::var("AQUATHERM_LNG") {
            match lng_str.parse::<f64>().ok().and_then(|lng| parse_longitude(lng).ok()) {
                Some(lng) => self.lng.update(lng, ConfigSource::Environment),
                None => tracing::warn!(
                    "Invalid AQUATHERM_LNG value '{}': expected decimal degrees in [-180, 180]",
                    lng_str
                ),
            }
        }

        // AQUATHERM_ZOOM
        if let Ok(zoom_str) = env::var("AQUATHERM_ZOOM") {
            match zoom_str.parse::<u8>().ok().and_then(|zoom| parse_zoom(zoom).ok()) {
                Some(zoom) => self.zoom.update(zoom, ConfigSource::Environment),
                None => tracing::warn!(
                    "Invalid AQUATHERM_ZOOM value '{}': expected an integer zoom level in [0, {}]",
                    zoom_str,
                    MAX_ZOOM
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) -> Result<()> {
        if let Some(api_base_url) = overrides.api_base_url {
            self.api_base_url.update(parse_api_base_url(&api_base_url)?, ConfigSource::Cli);
        }

        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs.update(parse_timeout_secs(timeout_secs)?, ConfigSource::Cli);
        }

        if let Some(lat) = overrides.lat {
            self.lat.update(parse_latitude(lat)?, ConfigSource::Cli);
        }

        if let Some(lng) = overrides.lng {
            self.lng.update(parse_longitude(lng)?, ConfigSource::Cli);
        }

        Ok(())
    }

    /// The fixed session coordinate, validated
    pub fn session_coordinate(&self) -> Result<Coordinate> {
        Coordinate::new(self.lat.value, self.lng.value)
    }

    /// Bound on a single analysis call
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.value)
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "api_base_url".to_string(),
            (self.api_base_url.value.clone(), self.api_base_url.source),
        );

        map.insert(
            "timeout".to_string(),
            (format!("{}s", self.timeout_secs.value), self.timeout_secs.source),
        );

        map.insert("lat".to_string(), (self.lat.value.to_string(), self.lat.source));

        map.insert("lng".to_string(), (self.lng.value.to_string(), self.lng.source));

        map.insert("zoom".to_string(), (self.zoom.value.to_string(), self.zoom.source));

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    api_base_url: Option<String>,
    timeout_secs: Option<u64>,
    lat: Option<f64>,
    lng: Option<f64>,
    zoom: Option<u8>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub api_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Validate an API base URL, trimming any trailing slash
pub fn parse_api_base_url(s: &str) -> Result<String> {
    let trimmed = s.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(AquathermError::ConfigInvalid {
            key: "api_base_url".to_string(),
            reason: format!("Invalid API URL: {}. Use an http:// or https:// URL", s),
        })
    }
}

/// Validate a timeout in seconds
pub fn parse_timeout_secs(secs: u64) -> Result<u64> {
    if secs == 0 {
        Err(AquathermError::ConfigInvalid {
            key: "timeout_secs".to_string(),
            reason: "Timeout must be at least one second".to_string(),
        })
    } else {
        Ok(secs)
    }
}

/// Validate a latitude in decimal degrees
pub fn parse_latitude(lat: f64) -> Result<f64> {
    if lat.is_finite() && (-90.0..=90.0).contains(&lat) {
        Ok(lat)
    } else {
        Err(AquathermError::ConfigInvalid {
            key: "lat".to_string(),
            reason: format!("Latitude {} is outside [-90, 90]", lat),
        })
    }
}

/// Validate a longitude in decimal degrees
pub fn parse_longitude(lng: f64) -> Result<f64> {
    if lng.is_finite() && (-180.0..=180.0).contains(&lng) {
        Ok(lng)
    } else {
        Err(AquathermError::ConfigInvalid {
            key: "lng".to_string(),
            reason: format!("Longitude {} is outside [-180, 180]", lng),
        })
    }
}

/// Validate a map zoom level
pub fn parse_zoom(zoom: u8) -> Result<u8> {
    if zoom <= MAX_ZOOM {
        Ok(zoom)
    } else {
        Err(AquathermError::ConfigInvalid {
            key: "zoom".to_string(),
            reason: format!("Zoom {} is above the maximum of {}", zoom, MAX_ZOOM),
        })
    }
}
