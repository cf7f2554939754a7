//! Configuration file support for geoscriber.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/geoscriber/config.toml`.
//! Settings include the initial map view, tile provider, shape appearance,
//! and UI preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{DrawingConfig, MapConfig, UiConfig};

use crate::draw::Color;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root type that gets deserialized from the TOML file. All
/// fields have sensible defaults and will use those if not specified.
///
/// # Example TOML
/// ```toml
/// [map]
/// center_lat = 33.7
/// center_lon = 73.0
/// zoom = 12.0
///
/// [drawing]
/// stroke_color = "blue"
/// stroke_width = 3.0
/// fill_opacity = 0.2
///
/// [ui]
/// show_status_bar = true
/// max_title_len = 120
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Initial map view and tile provider
    #[serde(default)]
    pub map: MapConfig,

    /// Shape appearance
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to
    /// the default where clamping makes no sense) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `center_lat`: -85.0 - 85.0 (web mercator coverage)
    /// - `center_lon`: -180.0 - 180.0
    /// - `zoom`: 1.0 - 19.0
    /// - `stroke_width`: 1.0 - 10.0
    /// - `fill_opacity`: 0.0 - 1.0
    /// - `max_title_len`: 1 - 512
    pub fn validate_and_clamp(&mut self) {
        if !(-85.0..=85.0).contains(&self.map.center_lat) {
            log::warn!(
                "Invalid center_lat {:.4}, clamping to -85.0-85.0 range",
                self.map.center_lat
            );
            self.map.center_lat = self.map.center_lat.clamp(-85.0, 85.0);
        }

        if !(-180.0..=180.0).contains(&self.map.center_lon) {
            log::warn!(
                "Invalid center_lon {:.4}, clamping to -180.0-180.0 range",
                self.map.center_lon
            );
            self.map.center_lon = self.map.center_lon.clamp(-180.0, 180.0);
        }

        if !(1.0..=19.0).contains(&self.map.zoom) {
            log::warn!("Invalid zoom {:.1}, clamping to 1.0-19.0 range", self.map.zoom);
            self.map.zoom = self.map.zoom.clamp(1.0, 19.0);
        }

        // The tile URL must be a usable slippy template
        let url = &self.map.tile_url;
        if !(url.contains("{z}") && url.contains("{x}") && url.contains("{y}")) {
            log::warn!(
                "Tile URL '{}' is missing {{z}}/{{x}}/{{y}} placeholders, falling back to default",
                self.map.tile_url
            );
            self.map.tile_url = MapConfig::default().tile_url;
        }

        if !(1.0..=10.0).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-10.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = self.drawing.stroke_width.clamp(1.0, 10.0);
        }

        if !(0.0..=1.0).contains(&self.drawing.fill_opacity) {
            log::warn!(
                "Invalid fill_opacity {:.2}, clamping to 0.0-1.0 range",
                self.drawing.fill_opacity
            );
            self.drawing.fill_opacity = self.drawing.fill_opacity.clamp(0.0, 1.0);
        }

        if Color::from_name(&self.drawing.stroke_color).is_none() {
            log::warn!(
                "Unknown stroke_color '{}', falling back to 'blue'",
                self.drawing.stroke_color
            );
            self.drawing.stroke_color = "blue".to_string();
        }

        if Color::from_name(&self.drawing.preview_color).is_none() {
            log::warn!(
                "Unknown preview_color '{}', falling back to 'orange'",
                self.drawing.preview_color
            );
            self.drawing.preview_color = "orange".to_string();
        }

        if !(1..=512).contains(&self.ui.max_title_len) {
            log::warn!(
                "Invalid max_title_len {}, clamping to 1-512 range",
                self.ui.max_title_len
            );
            self.ui.max_title_len = self.ui.max_title_len.clamp(1, 512);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/geoscriber/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("geoscriber");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Creates the parent directory if it doesn't exist. This method is
    /// kept for future use (e.g., runtime config editing).
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_center_on_the_expected_city() {
        let config = Config::default();
        assert_eq!(config.map.center_lat, 33.7);
        assert_eq!(config.map.center_lon, 73.0);
        assert_eq!(config.map.zoom, 12.0);
        assert!(config.map.tile_url.contains("{z}"));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.map.center_lat = 100.0;
        config.map.center_lon = -300.0;
        config.map.zoom = 42.0;
        config.drawing.stroke_width = 0.2;
        config.drawing.fill_opacity = 1.8;
        config.ui.max_title_len = 10_000;

        config.validate_and_clamp();

        assert_eq!(config.map.center_lat, 85.0);
        assert_eq!(config.map.center_lon, -180.0);
        assert_eq!(config.map.zoom, 19.0);
        assert_eq!(config.drawing.stroke_width, 1.0);
        assert_eq!(config.drawing.fill_opacity, 1.0);
        assert_eq!(config.ui.max_title_len, 512);
    }

    #[test]
    fn broken_tile_url_falls_back_to_default() {
        let mut config = Config::default();
        config.map.tile_url = "https://tiles.example.com/static.png".to_string();

        config.validate_and_clamp();

        assert_eq!(config.map.tile_url, MapConfig::default().tile_url);
    }

    #[test]
    fn unknown_colors_fall_back() {
        let mut config = Config::default();
        config.drawing.stroke_color = "chartreuse".to_string();
        config.drawing.preview_color = "mauve".to_string();

        config.validate_and_clamp();

        assert_eq!(config.drawing.stroke_color, "blue");
        assert_eq!(config.drawing.preview_color, "orange");
    }

    #[test]
    fn load_from_reads_partial_files_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[map]\ncenter_lat = 51.5\ncenter_lon = -0.13\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.map.center_lat, 51.5);
        assert_eq!(config.map.center_lon, -0.13);
        // Unspecified sections keep their defaults
        assert_eq!(config.map.zoom, 12.0);
        assert!(config.ui.show_status_bar);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.map.zoom, 12.0);
    }

    #[test]
    fn load_from_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not valid = = toml").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
