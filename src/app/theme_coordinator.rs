//! Theme management and persistence coordination.

use crate::app::AppState;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme selection and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads theme preference from persistent storage, defaulting to the day theme.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        storage
            .and_then(|s| s.get_string(THEME_KEY))
            .unwrap_or_else(|| ilsmap::theme::DEFAULT_THEME.to_string())
    }

    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
    }

    /// Applies the current theme to egui and to the map painters.
    ///
    /// Called every frame so that theme switches take effect immediately.
    pub fn apply_current_theme(ctx: &egui::Context, state: &mut AppState) {
        let theme = state.theme_manager.theme_or_default(&state.theme_name);
        let mut visuals = if theme.name == "Night" {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        state.theme_manager.apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
        state.renderer.set_colors(&theme.colors);
    }
}
