//! Map capability input
//!
//! The map itself is an external collaborator; the console only describes
//! what it should show.

use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::models::Coordinate;

/// What the map surface should display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
}

impl MapView {
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self { center, zoom, markers: Vec::new() }
    }

    pub fn with_marker(mut self, at: Coordinate, title: impl Into<String>) -> Self {
        self.markers.push(MapMarker { lat: at.lat, lng: at.lng, title: title.into() });
        self
    }

    /// Markers as GeoJSON points, for map renderers that consume GeoJSON
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self
            .markers
            .iter()
            .map(|marker| {
                let mut properties = Map::new();
                properties.insert("title".to_string(), JsonValue::String(marker.title.clone()));

                Feature {
                    geometry: Some(Geometry::new(Value::Point(vec![marker.lng, marker.lat]))),
                    properties: Some(properties),
                    id: None,
                    bbox: None,
                    foreign_members: None,
                }
            })
            .collect();

        FeatureCollection { bbox: None, features, foreign_members: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map_has_no_features() {
        let view = MapView::new(Coordinate::MUMBAI, 12);
        assert!(view.markers.is_empty());
        assert!(view.to_feature_collection().features.is_empty());
    }

    #[test]
    fn test_marker_geojson_is_lng_lat() {
        let view = MapView::new(Coordinate::MUMBAI, 12).with_marker(Coordinate::MUMBAI, "Target");
        let collection = view.to_feature_collection();
        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        match &feature.geometry.as_ref().unwrap().value {
            Value::Point(position) => assert_eq!(position, &vec![72.8777, 19.0760]),
            other => panic!("expected point, got {:?}", other),
        }
        assert_eq!(feature.properties.as_ref().unwrap()["title"], "Target");
    }
}
