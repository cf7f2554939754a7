//! Geographic primitives and the serializable feature representation.
//!
//! This module defines the coordinate type shared by the shape model and the
//! map surface, plus the GeoJSON-style encoding that is derived on demand
//! from drawn shapes and written to the log sink.

pub mod feature;

// Re-export commonly used types at module level
pub use feature::{Feature, Geometry, GeometryError};

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate pair.
///
/// Plain value type with no projection logic of its own; converting to and
/// from screen space is the map widget's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns true when both components differ by less than `eps` degrees.
    pub fn approx_eq(&self, other: &GeoPoint, eps: f64) -> bool {
        (self.lat - other.lat).abs() < eps && (self.lon - other.lon).abs() < eps
    }
}
