//! GeoJSON-style feature encoding for drawn shapes.
//!
//! A [`Feature`] is the structured, serializable form of a shape: a closed
//! polygon ring plus a string-keyed properties mapping (e.g. `title`). It is
//! derived on demand and never persisted; its only consumer is the log sink.

use crate::draw::Shape;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors producing a geographic representation from a shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// The outline has too few distinct vertices to form a ring.
    #[error("shape outline has {got} vertices, need at least 3")]
    TooFewVertices {
        /// Number of vertices the outline actually had
        got: usize,
    },
}

/// Geometry portion of a feature.
///
/// Coordinates follow GeoJSON conventions: positions are `[lon, lat]` pairs
/// and the outer ring repeats its first position to close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Single-ring polygon area
    Polygon {
        /// Rings; only the outer ring is ever produced here
        coordinates: Vec<Vec<[f64; 2]>>,
    },
}

/// A serializable geographic feature: geometry plus unique-keyed properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Feature {
    /// The only entity kind this application emits
    Feature {
        /// Shape geometry in GeoJSON polygon form
        geometry: Geometry,
        /// Arbitrary key-value properties; `title` when the shape is titled
        properties: BTreeMap<String, Value>,
    },
}

impl Feature {
    /// Builds the feature for `shape`, attaching `title` when present.
    ///
    /// # Errors
    /// Returns [`GeometryError::TooFewVertices`] when the outline cannot
    /// form a ring. Shapes built through the editor always can; this guards
    /// hand-constructed values.
    pub fn from_shape(shape: &Shape, title: Option<&str>) -> Result<Self, GeometryError> {
        let outline = shape.outline();
        if outline.len() < 3 {
            return Err(GeometryError::TooFewVertices { got: outline.len() });
        }

        let mut ring: Vec<[f64; 2]> = outline.iter().map(|p| [p.lon, p.lat]).collect();
        // GeoJSON rings are closed: first position repeated last
        ring.push(ring[0]);

        let mut properties = BTreeMap::new();
        if let Some(title) = title {
            properties.insert("title".to_string(), Value::String(title.to_string()));
        }

        Ok(Feature::Feature {
            geometry: Geometry::Polygon {
                coordinates: vec![ring],
            },
            properties,
        })
    }

    /// The `title` property, when set.
    pub fn title(&self) -> Option<&str> {
        let Feature::Feature { properties, .. } = self;
        properties.get("title").and_then(Value::as_str)
    }

    /// Human-readable serialization for the log sink.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|err| format!("<feature serialization failed: {err}>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;

    fn triangle() -> Shape {
        Shape::Polygon {
            vertices: vec![
                GeoPoint::new(33.70, 73.00),
                GeoPoint::new(33.72, 73.00),
                GeoPoint::new(33.72, 73.03),
            ],
        }
    }

    #[test]
    fn polygon_ring_is_closed_and_lon_lat_ordered() {
        let feature = Feature::from_shape(&triangle(), None).unwrap();
        let Feature::Feature { geometry, .. } = &feature;
        let Geometry::Polygon { coordinates } = geometry;

        assert_eq!(coordinates.len(), 1);
        let ring = &coordinates[0];
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], ring[3]);
        // GeoJSON positions are [lon, lat]
        assert_eq!(ring[0], [73.00, 33.70]);
    }

    #[test]
    fn rectangle_expands_to_four_corner_ring() {
        let shape = Shape::Rectangle {
            a: GeoPoint::new(33.70, 73.00),
            b: GeoPoint::new(33.72, 73.04),
        };
        let feature = Feature::from_shape(&shape, None).unwrap();
        let Feature::Feature { geometry, .. } = &feature;
        let Geometry::Polygon { coordinates } = geometry;

        let ring = &coordinates[0];
        assert_eq!(ring.len(), 5);
        assert!(ring.contains(&[73.00, 33.70]));
        assert!(ring.contains(&[73.04, 33.70]));
        assert!(ring.contains(&[73.04, 33.72]));
        assert!(ring.contains(&[73.00, 33.72]));
    }

    #[test]
    fn title_lands_in_properties() {
        let feature = Feature::from_shape(&triangle(), Some("Park Zone")).unwrap();
        assert_eq!(feature.title(), Some("Park Zone"));

        let untitled = Feature::from_shape(&triangle(), None).unwrap();
        assert_eq!(untitled.title(), None);
        let Feature::Feature { properties, .. } = &untitled;
        assert!(properties.is_empty());
    }

    #[test]
    fn degenerate_outline_is_rejected() {
        let shape = Shape::Polygon {
            vertices: vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)],
        };
        assert_eq!(
            Feature::from_shape(&shape, None),
            Err(GeometryError::TooFewVertices { got: 2 })
        );
    }

    #[test]
    fn serializes_with_geojson_type_tags() {
        let feature = Feature::from_shape(&triangle(), Some("Park Zone")).unwrap();
        let value = serde_json::to_value(&feature).unwrap();

        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "Polygon");
        assert_eq!(value["properties"]["title"], "Park Zone");
    }
}
