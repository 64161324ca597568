//! Panel orchestration and layout management.
//!
//! Coordinates the header, map, and status panels.

use crate::app::AppState;
use crate::ui::{header, map_panel, status_bar};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// User requested a new synthetic data set
    RegenerateDataRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header::HeaderInteraction::RegenerateDataRequested) = header::render_header(ui, state) {
                interaction = Some(PanelInteraction::RegenerateDataRequested);
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                map_panel::render_map_panel(ui, ctx, state);
            });

        interaction
    }
}
