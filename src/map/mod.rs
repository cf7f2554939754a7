//! Map hosting: widget lifecycle and the shape layer plugin.
//!
//! The mapping library ([`walkers`]) supplies tiles, projection, and
//! pan/zoom handling; this module owns its long-lived state and layers the
//! drawn shapes on top of it.

pub mod host;
pub mod plugins;

// Re-export commonly used types at module level
pub use host::MapHost;
pub use plugins::{LayerStyle, PointerEvent, PointerEvents, ShapeLayerPlugin};
