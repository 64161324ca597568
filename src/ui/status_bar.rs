//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying view and data metadata.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let projection = state.map_view.projection();
    let distance_km = projection.view_distance_km();

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!(
            "Zoom: {:.1} | View: {:.0} km",
            state.map_view.zoom(),
            distance_km
        )).strong());

        ui.label(RichText::new("|").strong());

        let layer_text = match state.layers.layer_for_distance(distance_km) {
            Some(layer) if layer.airport_diagram => "Layer: airport diagram".to_string(),
            Some(layer) if layer.max_range_km < f32::MAX => format!("Layer: ≤{:.0} km", layer.max_range_km),
            Some(_) => "Layer: overview".to_string(),
            None => "Layer: none".to_string(),
        };
        ui.label(RichText::new(layer_text).strong());

        ui.label(RichText::new("|").strong());

        ui.label(RichText::new(format!(
            "Virtual ILS | Seed: {} | Records: {} | Queried: {} | Drawn: {}",
            state.data_seed,
            state.query.records().len(),
            state.last_stats.queried,
            state.last_stats.drawn
        )).strong());

        if let Some(pos) = state.interaction.hover_pos() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("{:.4}, {:.4}", pos.lat, pos.lon)).strong());
            });
        }
    });
}
