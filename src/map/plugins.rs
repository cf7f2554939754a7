//! Shape layer plugin: renders drawn shapes and captures pointer events.

use std::sync::{Arc, Mutex};

use crate::draw::{Color, DrawnShape, ShapeId};
use crate::geo::GeoPoint;
use crate::input::Tool;
use egui::{Color32, FontId, Pos2, Stroke};
use walkers::{Plugin, Projector};

/// Pointer event captured on the map surface, already unprojected to
/// geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary click
    Click(GeoPoint),
    /// Primary double-click (closes a polygon outline)
    DoubleClick(GeoPoint),
    /// Secondary click (cancels the outline)
    SecondaryClick,
}

/// Shared queue the plugin pushes pointer events into.
///
/// The plugin runs inside the map widget and only borrows the response, so
/// events travel out through this handle; the shell drains it right after
/// the widget has run.
pub type PointerEvents = Arc<Mutex<Vec<PointerEvent>>>;

/// Visual style for the shape layer, derived from configuration.
#[derive(Debug, Clone, Copy)]
pub struct LayerStyle {
    /// Stroke color for committed shapes
    pub stroke: Color32,
    /// Fill color for committed shapes
    pub fill: Color32,
    /// Stroke width in pixels
    pub stroke_width: f32,
    /// Color for in-progress outlines and the pending highlight
    pub preview: Color32,
}

impl LayerStyle {
    /// Builds the style from configured colors.
    pub fn new(stroke: Color, fill_opacity: f64, stroke_width: f32, preview: Color) -> Self {
        Self {
            stroke: stroke.to_color32(),
            fill: stroke.with_alpha(fill_opacity).to_color32(),
            stroke_width,
            preview: preview.to_color32(),
        }
    }
}

/// Plugin rendering the shape collection, title labels, and the
/// in-progress outline on top of the tile layer.
pub struct ShapeLayerPlugin {
    shapes: Vec<DrawnShape>,
    pending: Option<ShapeId>,
    sketch: Option<(Tool, Vec<GeoPoint>)>,
    style: LayerStyle,
    events: PointerEvents,
}

impl ShapeLayerPlugin {
    /// Builds the per-frame plugin from editor snapshots.
    pub fn new(
        shapes: Vec<DrawnShape>,
        pending: Option<ShapeId>,
        sketch: Option<(Tool, Vec<GeoPoint>)>,
        style: LayerStyle,
        events: PointerEvents,
    ) -> Self {
        Self {
            shapes,
            pending,
            sketch,
            style,
            events,
        }
    }

    fn project(projector: &Projector, p: GeoPoint) -> Pos2 {
        let screen = projector.project(walkers::lat_lon(p.lat, p.lon));
        egui::pos2(screen.x, screen.y)
    }

    fn unproject(projector: &Projector, pos: Pos2) -> GeoPoint {
        let position = projector.unproject(pos.to_vec2());
        GeoPoint::new(position.y(), position.x())
    }

    fn capture_pointer(&self, response: &egui::Response, projector: &Projector) {
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        let Ok(mut events) = self.events.lock() else {
            return;
        };
        if response.double_clicked() {
            events.push(PointerEvent::DoubleClick(Self::unproject(projector, pos)));
        } else if response.clicked() {
            events.push(PointerEvent::Click(Self::unproject(projector, pos)));
        } else if response.secondary_clicked() {
            events.push(PointerEvent::SecondaryClick);
        }
    }
}

impl Plugin for ShapeLayerPlugin {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
    ) {
        self.capture_pointer(response, projector);

        let painter = ui.painter().with_clip_rect(response.rect);

        // Committed shapes, pending one in the highlight color
        for drawn in &self.shapes {
            let ring: Vec<Pos2> = drawn
                .shape
                .outline()
                .iter()
                .map(|p| Self::project(projector, *p))
                .collect();
            if ring.len() < 3 {
                continue;
            }

            let pending = self.pending == Some(drawn.id);
            let stroke_color = if pending {
                self.style.preview
            } else {
                self.style.stroke
            };
            let fill = if pending {
                self.style.preview.linear_multiply(0.2)
            } else {
                self.style.fill
            };
            painter.add(egui::Shape::convex_polygon(
                ring,
                fill,
                Stroke::new(self.style.stroke_width, stroke_color),
            ));

            // Bound title label at the shape anchor
            if let Some(title) = &drawn.title {
                let anchor = Self::project(projector, drawn.shape.anchor());
                let galley =
                    painter.layout_no_wrap(title.clone(), FontId::proportional(13.0), Color32::WHITE);
                let label_pos = anchor
                    - egui::vec2(galley.rect.width() / 2.0, galley.rect.height() / 2.0);
                let text_rect = galley.rect.translate(label_pos.to_vec2());
                painter.rect_filled(text_rect.expand(3.0), 3.0, Color32::from_black_alpha(180));
                painter.galley(label_pos, galley, Color32::WHITE);
            }
        }

        // In-progress outline with a rubber band to the cursor
        if let Some((tool, points)) = &self.sketch {
            let mut screen: Vec<Pos2> = points
                .iter()
                .map(|p| Self::project(projector, *p))
                .collect();
            if let Some(hover) = response.hover_pos() {
                screen.push(hover);
            }

            let stroke = Stroke::new(self.style.stroke_width, self.style.preview);
            match tool {
                Tool::Rect => {
                    if screen.len() >= 2 {
                        let rect = egui::Rect::from_two_pos(screen[0], screen[screen.len() - 1]);
                        let corners = [
                            rect.left_top(),
                            rect.right_top(),
                            rect.right_bottom(),
                            rect.left_bottom(),
                        ];
                        for i in 0..corners.len() {
                            painter.line_segment(
                                [corners[i], corners[(i + 1) % corners.len()]],
                                stroke,
                            );
                        }
                    }
                    painter.circle_filled(screen[0], 4.0, self.style.preview);
                }
                Tool::Polygon => {
                    for i in 1..screen.len() {
                        painter.line_segment([screen[i - 1], screen[i]], stroke);
                    }
                    if screen.len() > 2 {
                        // Provisional closing edge
                        painter.line_segment(
                            [screen[screen.len() - 1], screen[0]],
                            Stroke::new(1.0, self.style.preview.linear_multiply(0.5)),
                        );
                    }
                    for pt in points.iter().map(|p| Self::project(projector, *p)) {
                        painter.circle_filled(pt, 4.0, self.style.preview);
                    }
                }
            }
        }
    }
}
