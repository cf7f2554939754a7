//! Map host: owns the mapping library state for the window's lifetime.

use crate::config::MapConfig;
use crate::geo::GeoPoint;
use walkers::sources::{Attribution, TileSource};
use walkers::{HttpTiles, MapMemory, TileId};

/// Tile source driven by a URL template from configuration.
#[derive(Debug, Clone)]
pub struct TemplateTileSource {
    url_template: String,
    attribution: &'static str,
}

impl TemplateTileSource {
    /// Creates a source for a slippy `{z}/{x}/{y}` URL template.
    pub fn new(url_template: String, attribution: String) -> Self {
        // Attribution text requires a 'static lifetime; the provider is
        // created once per run, so the leak is bounded.
        let attribution: &'static str = Box::leak(attribution.into_boxed_str());
        Self {
            url_template,
            attribution,
        }
    }
}

impl TileSource for TemplateTileSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        self.url_template
            .replace("{z}", &tile_id.zoom.to_string())
            .replace("{x}", &tile_id.x.to_string())
            .replace("{y}", &tile_id.y.to_string())
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: self.attribution,
            url: "",
            logo_light: None,
            logo_dark: None,
        }
    }
}

/// Owns the map widget's long-lived state: the pan/zoom memory and the
/// HTTP tile fetcher.
///
/// The hosting view calls [`MapHost::initialize`] once on mount and
/// [`MapHost::teardown`] on unmount. Both are idempotent: a re-rendered
/// view cannot end up with a second live map, and tearing down a host that
/// was never initialized is a no-op.
pub struct MapHost {
    center: GeoPoint,
    zoom: f64,
    tile_url: String,
    attribution: String,
    memory: Option<MapMemory>,
    tiles: Option<HttpTiles>,
    initialized: bool,
}

impl MapHost {
    /// Captures the configured view; no live resources are created yet.
    pub fn new(config: &MapConfig) -> Self {
        Self {
            center: GeoPoint::new(config.center_lat, config.center_lon),
            zoom: config.zoom,
            tile_url: config.tile_url.clone(),
            attribution: config.attribution.clone(),
            memory: None,
            tiles: None,
            initialized: false,
        }
    }

    /// Creates the pan/zoom state and applies the configured zoom.
    ///
    /// Calling this on an already-initialized host is a no-op, so repeated
    /// mounts never reset the user's pan/zoom state.
    pub fn initialize(&mut self) {
        if self.initialized {
            log::debug!("Map host already initialized; ignoring");
            return;
        }

        let mut memory = MapMemory::default();
        if let Err(err) = memory.set_zoom(self.zoom) {
            log::warn!(
                "Configured zoom {:.1} rejected by the map widget: {err:?}",
                self.zoom
            );
        }
        self.memory = Some(memory);
        self.initialized = true;

        log::info!(
            "Map initialized at {:.4}, {:.4} (zoom {:.1})",
            self.center.lat,
            self.center.lon,
            self.zoom
        );
    }

    /// Creates the tile fetcher on first use.
    ///
    /// The fetcher needs the UI context for repaint notifications, so it is
    /// created lazily on the first frame. No-op until [`MapHost::initialize`]
    /// has run, and no-op once the fetcher exists.
    pub fn ensure_tiles(&mut self, ctx: &egui::Context) {
        if !self.initialized || self.tiles.is_some() {
            return;
        }
        let source = TemplateTileSource::new(self.tile_url.clone(), self.attribution.clone());
        self.tiles = Some(HttpTiles::new(source, ctx.clone()));
        log::debug!("Tile fetcher created for {}", self.tile_url);
    }

    /// Releases the tile fetcher and pan/zoom state.
    ///
    /// Safe to call at any point, including before [`MapHost::initialize`]
    /// and repeatedly.
    pub fn teardown(&mut self) {
        if self.initialized {
            log::info!("Map torn down");
        }
        self.tiles = None;
        self.memory = None;
        self.initialized = false;
    }

    /// Whether [`MapHost::initialize`] has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the tile fetcher exists.
    pub fn has_tiles(&self) -> bool {
        self.tiles.is_some()
    }

    /// Initial view center as a map widget position.
    pub fn center_position(&self) -> walkers::Position {
        walkers::lat_lon(self.center.lat, self.center.lon)
    }

    /// Current zoom level, when live.
    pub fn zoom(&self) -> Option<f64> {
        self.memory.as_ref().map(|memory| memory.zoom())
    }

    /// Mutable access for the map widget; `None` until initialized.
    ///
    /// Tiles may still be pending (`ensure_tiles` not called yet), in which
    /// case the widget renders without a tile layer.
    pub fn widget_state(&mut self) -> Option<(&mut MapMemory, Option<&mut HttpTiles>)> {
        let memory = self.memory.as_mut()?;
        Some((memory, self.tiles.as_mut()))
    }
}
