//! Drawing tool selection.

/// Drawing tool selection.
///
/// The active tool determines what shape a map click contributes to. The
/// toolbar deliberately offers area shapes only; there are no point, line,
/// or circle tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Polygon outline - click to add vertices, double-click to close
    Polygon,
    /// Rectangle - click two opposite corners
    Rect,
}

impl Tool {
    /// Toolbar label.
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Polygon => "Polygon",
            Tool::Rect => "Rectangle",
        }
    }
}
