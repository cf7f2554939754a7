//! Geographic shape definitions for the drawing layer.

use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// A drawable area shape captured from the map.
///
/// Shapes store geographic coordinates only; projecting them to screen
/// space happens at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Closed polygon outline; vertices in click order, at least three
    Polygon {
        /// Outline vertices (the closing edge is implicit)
        vertices: Vec<GeoPoint>,
    },
    /// Rectangle spanned by two opposite corners
    Rectangle {
        /// First corner clicked
        a: GeoPoint,
        /// Opposite corner
        b: GeoPoint,
    },
}

impl Shape {
    /// Outline ring without the closing vertex.
    ///
    /// Rectangles expand to their four corners.
    pub fn outline(&self) -> Vec<GeoPoint> {
        match self {
            Shape::Polygon { vertices } => vertices.clone(),
            Shape::Rectangle { a, b } => vec![
                *a,
                GeoPoint::new(a.lat, b.lon),
                *b,
                GeoPoint::new(b.lat, a.lon),
            ],
        }
    }

    /// Label anchor: arithmetic mean of the outline vertices.
    pub fn anchor(&self) -> GeoPoint {
        let outline = self.outline();
        let n = outline.len().max(1) as f64;
        let (lat, lon) = outline
            .iter()
            .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat, lon + p.lon));
        GeoPoint::new(lat / n, lon / n)
    }
}
