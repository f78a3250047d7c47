use serde::{Deserialize, Serialize};

use crate::error::{AquathermError, Result};

/// Geographic point in WGS 84 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Default session target (Mumbai, IN)
    pub const MUMBAI: Coordinate = Coordinate { lat: 19.0760, lng: 72.8777 };

    /// Create a coordinate, rejecting out-of-range or non-finite values
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let coordinate = Self { lat, lng };
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(AquathermError::InvalidCoordinate { lat, lng })
        }
    }

    /// Check latitude/longitude ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::MUMBAI
    }
}
