//! Editor state machine core.

use crate::draw::{ShapeCollection, ShapeId};
use crate::geo::{Feature, GeoPoint};
use crate::input::tool::Tool;

/// Current editor phase.
///
/// Tracks whether the user is idle, placing outline vertices, or naming a
/// freshly drawn shape. Transitions occur in response to map clicks,
/// toolbar actions, and keyboard events; every transition completes
/// synchronously inside the event that triggered it.
#[derive(Debug)]
pub enum DrawPhase {
    /// Waiting for the first click of a new shape
    Idle,
    /// Collecting outline vertices with the given tool
    Sketching {
        /// Tool the outline belongs to
        tool: Tool,
        /// Vertices in click order
        points: Vec<GeoPoint>,
    },
    /// A shape is on the map and waiting for a title decision.
    ///
    /// At most one shape can be in this phase; map clicks and tool
    /// switches are rejected until the prompt is resolved.
    Titling {
        /// The shape awaiting its title
        subject: ShapeId,
        /// Title text typed so far
        buffer: String,
    },
}

/// Editor state: the shape collection plus the interaction state machine.
///
/// Holds no UI-toolkit types; the shell translates pointer and key events
/// into method calls so the transitions stay independently testable.
pub struct EditorState {
    /// All committed shapes, in draw order
    pub collection: ShapeCollection,
    /// Tool used for the next outline
    pub active_tool: Tool,
    /// Current phase
    pub phase: DrawPhase,
    /// Maximum accepted title length in characters (from config)
    pub max_title_len: usize,
}

impl EditorState {
    /// Creates an editor with an empty collection.
    ///
    /// # Arguments
    /// * `active_tool` - Tool preselected in the toolbar
    /// * `max_title_len` - Title length cap in characters
    pub fn with_defaults(active_tool: Tool, max_title_len: usize) -> Self {
        Self {
            collection: ShapeCollection::new(),
            active_tool,
            phase: DrawPhase::Idle,
            max_title_len,
        }
    }

    /// Selects the tool for the next outline.
    ///
    /// Switching tools discards an in-progress outline. Ignored while a
    /// title decision is pending.
    pub fn select_tool(&mut self, tool: Tool) {
        if matches!(self.phase, DrawPhase::Titling { .. }) {
            return;
        }
        if matches!(self.phase, DrawPhase::Sketching { .. }) {
            log::debug!("Tool switched mid-outline; discarding it");
            self.phase = DrawPhase::Idle;
        }
        self.active_tool = tool;
    }

    /// Whether an outline is currently in progress.
    pub fn is_sketching(&self) -> bool {
        matches!(self.phase, DrawPhase::Sketching { .. })
    }

    /// Whether the in-progress outline can be closed into a polygon.
    pub fn can_close_polygon(&self) -> bool {
        matches!(
            &self.phase,
            DrawPhase::Sketching {
                tool: Tool::Polygon,
                points
            } if points.len() >= 3
        )
    }

    /// The shape currently awaiting a title, if any.
    pub fn pending_subject(&self) -> Option<ShapeId> {
        match &self.phase {
            DrawPhase::Titling { subject, .. } => Some(*subject),
            _ => None,
        }
    }

    /// Snapshot of the in-progress outline for rendering.
    pub fn sketch(&self) -> Option<(Tool, Vec<GeoPoint>)> {
        match &self.phase {
            DrawPhase::Sketching { tool, points } => Some((*tool, points.clone())),
            _ => None,
        }
    }

    /// Writes the shape's geographic representation to the log sink.
    pub(super) fn log_representation(&self, id: ShapeId, heading: &str) {
        let Some(drawn) = self.collection.get(id) else {
            return;
        };
        match Feature::from_shape(&drawn.shape, drawn.title.as_deref()) {
            Ok(feature) => log::info!("{heading}\n{}", feature.to_pretty_json()),
            Err(err) => log::warn!("Could not encode shape for logging: {err}"),
        }
    }
}
