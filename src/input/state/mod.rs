mod core;
mod sketch;
mod titling;
#[cfg(test)]
mod tests;

pub use core::{DrawPhase, EditorState};
