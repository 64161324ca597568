//! Map panel UI rendering
//!
//! Handles the central map with the coordinate grid and ILS symbols.
//! Includes pan and zoom through the map input handler.

use eframe::egui;
use ilsmap::{EguiMapPainter, MapProjection, PaintContext, ViewContext};

use crate::app::AppState;
use crate::rendering::grid_renderer;
use crate::ui::input::map_input_handler;

/// Renders the map canvas filling the remaining space of `ui`.
pub fn render_map_panel(ui: &mut egui::Ui, ctx: &egui::Context, state: &mut AppState) {
    let canvas_rect = ui.available_rect_before_wrap();
    let canvas_response = ui.interact(
        canvas_rect,
        ui.id().with("map_canvas"),
        egui::Sense::drag().union(egui::Sense::hover()),
    );

    state.map_view.set_screen_rect(canvas_rect);
    map_input_handler::handle_map_input(
        ctx,
        canvas_rect,
        &canvas_response,
        &mut state.map_view,
        &mut state.interaction,
    );

    let colors = state
        .theme_manager
        .theme_or_default(&state.theme_name)
        .colors
        .clone();

    let painter = ui.painter_at(canvas_rect);
    painter.rect_filled(canvas_rect, 0.0, colors.background);
    grid_renderer::render_grid(&painter, state.map_view.projection(), &colors);

    let projection = state.map_view.projection();
    let Some(layer) = state.layers.layer_for_distance(projection.view_distance_km()) else {
        return;
    };

    let view_context = state.interaction.view_context();
    let font_id = egui::FontId::proportional(state.renderer.settings().font_size);
    let mut map_painter = EguiMapPainter::new(painter, font_id);

    let mut context = PaintContext {
        painter: &mut map_painter,
        projection,
        view_box: projection.view_box(),
        view_context,
        map_layer: layer,
        map_layer_effective: layer,
        options: &state.options,
    };
    state.last_stats = state.renderer.render(&mut context, &mut state.query);

    // Labels are skipped while moving; draw one more still frame afterwards
    if view_context == ViewContext::Animation {
        ctx.request_repaint();
    }
}
