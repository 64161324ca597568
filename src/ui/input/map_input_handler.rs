//! Map input handling for panning and zooming.
//!
//! - Drag panning (left mouse + drag)
//! - Scroll wheel zoom around the cursor
//! - Pinch zoom on touch devices
//! - Cursor tracking for the hover position

use eframe::egui;

use crate::state::{InteractionState, MapViewState};

/// Zoom levels per scroll pixel
const SCROLL_ZOOM_RATE: f64 = 1.0 / 240.0;

/// Handles all map input events and updates view and interaction state.
///
/// # Arguments
/// * `ctx` - The egui context for input access
/// * `canvas_rect` - The map rectangle
/// * `canvas_response` - The map interaction response
/// * `map_view` - View state to pan and zoom
/// * `interaction` - Interaction state to update
pub fn handle_map_input(
    ctx: &egui::Context,
    canvas_rect: egui::Rect,
    canvas_response: &egui::Response,
    map_view: &mut MapViewState,
    interaction: &mut InteractionState,
) {
    if canvas_response.dragged() {
        let drag_delta = canvas_response.drag_delta();
        interaction.set_dragging(true);
        if drag_delta != egui::Vec2::ZERO {
            map_view.pan(drag_delta);
        }
    } else if interaction.is_dragging() {
        interaction.set_dragging(false);
    }

    let hover_pos = ctx
        .input(|i| i.pointer.hover_pos())
        .filter(|pos| canvas_rect.contains(*pos));

    interaction.set_hover_pos(hover_pos.map(|pos| map_view.projection().screen_to_world(pos)));

    if let Some(hover_pos) = hover_pos {
        let (scroll_y, pinch) = ctx.input(|i| (i.smooth_scroll_delta.y, i.zoom_delta()));

        let zoom_delta = if pinch != 1.0 {
            (pinch as f64).log2()
        } else {
            scroll_y as f64 * SCROLL_ZOOM_RATE
        };

        if zoom_delta != 0.0 {
            map_view.zoom_around(zoom_delta, hover_pos);
            interaction.mark_zoomed();
        }
    }
}
