//! Header panel UI rendering
//!
//! Handles the top menu bar with display toggles, zoom buttons, and theme selector.

use eframe::egui;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "New Data" button
    RegenerateDataRequested,
}

/// Renders the application header with display toggles and zoom controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("🎲 New Data").clicked() {
            interaction = Some(HeaderInteraction::RegenerateDataRequested);
        }

        ui.separator();

        if ui.button("🔍+").clicked() {
            state.map_view.zoom_by(1.0);
        }

        if ui.button("🔍-").clicked() {
            state.map_view.zoom_by(-1.0);
        }

        if ui.button("⛶ Reset").clicked() {
            state.map_view.reset();
        }

        ui.label(format!("Zoom: {:.1}", state.map_view.zoom()));

        ui.separator();

        ui.checkbox(&mut state.options.show_ils, "ILS");

        let verbose_response = ui.checkbox(&mut state.options.verbose, "Verbose");
        if verbose_response.hovered() {
            verbose_response.on_hover_text("Log render diagnostics for still frames (RUST_LOG=debug)");
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme_name.clone();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme_manager.list_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name,
                        );
                    }
                });

            if old_theme != current_theme {
                tracing::info!(theme = %current_theme, "Theme changed");
                state.theme_name = current_theme;
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    interaction
}
