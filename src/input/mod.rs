//! Input handling and editor state machine.
//!
//! This module turns toolbar, pointer, and keyboard events into shape
//! drawing and titling transitions. It owns the current tool selection and
//! the state machine for the drawing modes (idle, outlining, titling), and
//! is deliberately free of UI-toolkit types so it can be tested on its own.

pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use state::{DrawPhase, EditorState};
pub use tool::Tool;
