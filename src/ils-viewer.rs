//! ILS Map Viewer GUI Application
//!
//! Interactive map showing instrument landing system symbols using the egui framework.
//! The viewer features:
//! - Pannable and zoomable Web-Mercator map with a coordinate grid
//! - Zoom-dependent detail layers for ILS feathers and labels
//! - Fast drawing while the map moves, full labels when it is still
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - State management for the map view and interactions
//! - `ui/` - UI panel rendering and input handling
//! - `rendering/` - Map background rendering

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod logging;
mod rendering;
mod state;
mod ui;

use app::{AppState, SettingsCoordinator, ThemeCoordinator};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the ILS viewer GUI.
fn main() -> eframe::Result {
    if let Err(err) = logging::init_logging() {
        eprintln!("Failed to initialize logging: {err:#}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("ILS Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "ILS Viewer",
        options,
        Box::new(|cc| Ok(Box::new(IlsViewerApp::new(cc)))),
    )
}

/// The main ILS viewer application.
///
/// Delegates persistence to `SettingsCoordinator` and `ThemeCoordinator`,
/// and layout to `PanelManager`.
struct IlsViewerApp {
    /// Centralized application state
    state: AppState,
}

impl IlsViewerApp {
    /// Creates a new viewer instance with settings loaded from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let settings = SettingsCoordinator::load_viewer_settings(cc.storage);
        let layers = SettingsCoordinator::load_layer_settings();

        Self {
            state: AppState::new(theme_name, settings, layers),
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::RegenerateDataRequested => {
                let seed = self.state.data_seed.wrapping_add(1);
                self.state.regenerate_data(seed);
            }
        }
    }
}

impl eframe::App for IlsViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, &self.state.theme_name);
        SettingsCoordinator::save_viewer_settings(storage, &self.state.viewer_settings());
    }

    /// Main update loop:
    /// 1. Reset per-frame interaction flags
    /// 2. Apply theme
    /// 3. Render all panels via PanelManager
    /// 4. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.interaction.begin_frame();

        ThemeCoordinator::apply_current_theme(ctx, &mut self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}
