//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Initial map view and tile provider settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial view center latitude in degrees (valid range: -85.0 - 85.0)
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    /// Initial view center longitude in degrees (valid range: -180.0 - 180.0)
    #[serde(default = "default_center_lon")]
    pub center_lon: f64,

    /// Initial zoom level (valid range: 1.0 - 19.0)
    #[serde(default = "default_zoom")]
    pub zoom: f64,

    /// Slippy tile URL template; must contain `{z}`, `{x}` and `{y}`
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Attribution line shown on the map
    #[serde(default = "default_attribution")]
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lon: default_center_lon(),
            zoom: default_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
        }
    }
}

/// Shape appearance settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Stroke color for committed shapes - a named color
    /// (red, green, blue, yellow, orange, pink, white, black)
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,

    /// Stroke width in pixels (valid range: 1.0 - 10.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,

    /// Fill opacity for committed shapes (valid range: 0.0 - 1.0)
    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f64,

    /// Color for in-progress outlines and the pending shape highlight
    #[serde(default = "default_preview_color")]
    pub preview_color: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            fill_opacity: default_fill_opacity(),
            preview_color: default_preview_color(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the status bar with shape count, zoom level, and hints
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Maximum title length in characters (valid range: 1 - 512)
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            max_title_len: default_max_title_len(),
        }
    }
}

// Default value functions for serde

fn default_center_lat() -> f64 {
    33.7
}

fn default_center_lon() -> f64 {
    73.0
}

fn default_zoom() -> f64 {
    12.0
}

fn default_tile_url() -> String {
    "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_attribution() -> String {
    "© OpenStreetMap contributors".to_string()
}

fn default_stroke_color() -> String {
    "blue".to_string()
}

fn default_stroke_width() -> f32 {
    3.0
}

fn default_fill_opacity() -> f64 {
    0.2
}

fn default_preview_color() -> String {
    "orange".to_string()
}

fn default_show_status() -> bool {
    true
}

fn default_max_title_len() -> usize {
    120
}
