//! Map click handling: outline capture for the active tool.

use crate::draw::Shape;
use crate::geo::GeoPoint;
use crate::input::tool::Tool;

use super::{DrawPhase, EditorState};

/// Two clicks closer than this (in degrees) count as the same vertex.
const VERTEX_EPS: f64 = 1e-9;

impl EditorState {
    /// Processes a primary click on the map at geographic position `p`.
    ///
    /// # Behavior
    /// - Idle: starts an outline with the active tool
    /// - Outlining a rectangle: the second corner completes the shape
    /// - Outlining a polygon: appends a vertex (consecutive duplicates
    ///   are ignored)
    /// - Titling: ignored - the pending title decision must be resolved
    ///   before another shape can be started
    pub fn on_map_click(&mut self, p: GeoPoint) {
        match &mut self.phase {
            DrawPhase::Idle => {
                self.phase = DrawPhase::Sketching {
                    tool: self.active_tool,
                    points: vec![p],
                };
            }
            DrawPhase::Sketching {
                tool: Tool::Rect,
                points,
            } => {
                let a = points[0];
                if p.approx_eq(&a, VERTEX_EPS) {
                    // Zero-area rectangle; wait for a real opposite corner
                    return;
                }
                self.commit_shape(Shape::Rectangle { a, b: p });
            }
            DrawPhase::Sketching {
                tool: Tool::Polygon,
                points,
            } => {
                if points.last().is_some_and(|last| last.approx_eq(&p, VERTEX_EPS)) {
                    return;
                }
                points.push(p);
            }
            DrawPhase::Titling { .. } => {}
        }
    }

    /// Closes the in-progress polygon outline.
    ///
    /// Trailing duplicate vertices (left behind by the second click of a
    /// double-click) are dropped first; outlines with fewer than three
    /// distinct vertices stay open.
    pub fn close_polygon(&mut self) {
        let DrawPhase::Sketching {
            tool: Tool::Polygon,
            points,
        } = &mut self.phase
        else {
            return;
        };

        while points.len() > 1 {
            let last = points[points.len() - 1];
            let prev = points[points.len() - 2];
            if last.approx_eq(&prev, VERTEX_EPS) {
                points.pop();
            } else {
                break;
            }
        }

        if points.len() < 3 {
            return;
        }

        let vertices = std::mem::take(points);
        self.commit_shape(Shape::Polygon { vertices });
    }

    /// Discards the in-progress outline (Escape, right click, or the
    /// toolbar cancel button).
    pub fn cancel_sketch(&mut self) {
        if matches!(self.phase, DrawPhase::Sketching { .. }) {
            self.phase = DrawPhase::Idle;
        }
    }

    /// Adds `shape` to the collection and opens the title prompt for it.
    fn commit_shape(&mut self, shape: Shape) {
        let id = self.collection.add(shape);
        self.phase = DrawPhase::Titling {
            subject: id,
            buffer: String::new(),
        };
        self.log_representation(id, "Shape drawn; geographic representation:");
    }
}
