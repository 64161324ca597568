//! Mouse and keyboard interaction state.
//!
//! This module tracks ongoing map interactions so that painters can switch to
//! fast drawing while the map moves.

use ilsmap::{GeoPos, ViewContext};

/// State related to ongoing mouse/keyboard interactions.
///
/// Responsibilities:
/// - Tracking drag/pan operations
/// - Remembering whether the view changed during the current frame
/// - Tracking the geographic position under the cursor
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Whether user is currently dragging to pan
    is_dragging: bool,
    /// Whether a wheel or pinch zoom happened this frame
    zoomed_this_frame: bool,
    /// Geographic position under the cursor
    hover_pos: Option<GeoPos>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears per-frame flags. Called once at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.zoomed_this_frame = false;
    }

    // ===== Queries =====

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn hover_pos(&self) -> Option<GeoPos> {
        self.hover_pos
    }

    /// Painters draw fast while the map is moving.
    pub fn view_context(&self) -> ViewContext {
        if self.is_dragging || self.zoomed_this_frame {
            ViewContext::Animation
        } else {
            ViewContext::Still
        }
    }

    // ===== Mutations =====

    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    pub fn mark_zoomed(&mut self) {
        self.zoomed_this_frame = true;
    }

    pub fn set_hover_pos(&mut self, pos: Option<GeoPos>) {
        self.hover_pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_context_follows_motion() {
        let mut state = InteractionState::new();
        assert_eq!(state.view_context(), ViewContext::Still);

        state.set_dragging(true);
        assert_eq!(state.view_context(), ViewContext::Animation);
        state.set_dragging(false);

        state.mark_zoomed();
        assert_eq!(state.view_context(), ViewContext::Animation);
        state.begin_frame();
        assert_eq!(state.view_context(), ViewContext::Still);
    }
}
