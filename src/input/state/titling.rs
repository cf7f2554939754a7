//! Title prompt transitions: submit, cancel, and buffer access.

use super::{DrawPhase, EditorState};

impl EditorState {
    /// Whether the title prompt is open.
    pub fn is_titling(&self) -> bool {
        matches!(self.phase, DrawPhase::Titling { .. })
    }

    /// Mutable access to the title text while the prompt is open.
    ///
    /// The text field edits this buffer in place.
    pub fn title_buffer_mut(&mut self) -> Option<&mut String> {
        match &mut self.phase {
            DrawPhase::Titling { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    /// Whether the current buffer passes validation (non-empty after
    /// trimming). The confirm action is disabled whenever this is false.
    pub fn can_submit(&self) -> bool {
        match &self.phase {
            DrawPhase::Titling { buffer, .. } => !buffer.trim().is_empty(),
            _ => false,
        }
    }

    /// Truncates the buffer to the configured title length cap.
    pub fn enforce_title_cap(&mut self) {
        let cap = self.max_title_len;
        if let DrawPhase::Titling { buffer, .. } = &mut self.phase {
            if buffer.chars().count() > cap {
                *buffer = buffer.chars().take(cap).collect();
            }
        }
    }

    /// Attaches the typed title to the pending shape (Enter or the
    /// confirm button).
    ///
    /// The text is stored as typed; trimming is validation only. Returns
    /// false and keeps the prompt open when the trimmed buffer is empty.
    pub fn submit_title(&mut self) -> bool {
        let DrawPhase::Titling { subject, buffer } = &self.phase else {
            return false;
        };
        if buffer.trim().is_empty() {
            return false;
        }
        let subject = *subject;
        let title = buffer.clone();

        if !self.collection.set_title(subject, title) {
            log::warn!("Pending shape vanished before titling; dropping the session");
            self.phase = DrawPhase::Idle;
            return false;
        }

        self.phase = DrawPhase::Idle;
        self.log_representation(subject, "Shape titled; geographic representation:");
        true
    }

    /// Discards the pending shape entirely (Escape or the cancel button).
    ///
    /// Cancelled shapes are removed from the map, not kept untitled.
    pub fn cancel_title(&mut self) {
        let DrawPhase::Titling { subject, .. } = &self.phase else {
            return;
        };
        let subject = *subject;
        self.collection.remove(subject);
        self.phase = DrawPhase::Idle;
    }
}
