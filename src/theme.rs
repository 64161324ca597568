//! Map color themes.
//!
//! Each [`Theme`] carries the palette used by map painters and by the viewer
//! chrome. The [`ThemeManager`] holds the built-in themes.
//!
//! # Examples
//!
//! ```
//! use ilsmap::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let night = manager.get_theme("Night").unwrap();
//! println!("ILS symbol color: {:?}", night.colors.ils_symbol);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Theme used when a requested theme does not exist
pub const DEFAULT_THEME: &str = "Day";

/// Color palette of a map theme
#[derive(Debug, Clone)]
pub struct MapColors {
    // Map surface
    pub background: Color32,
    pub grid: Color32,
    pub grid_text: Color32,

    // Chrome
    pub panel_background: Color32,
    pub text: Color32,

    // Navaid symbols
    pub ils_symbol: Color32,
    pub ils_text: Color32,
}

/// A named palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: MapColors,
}

/// Access to all built-in themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a manager with the built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [day_theme(), night_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self { themes }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns the named theme, or the default theme if it does not exist
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        match self.themes.get(name) {
            Some(theme) => theme,
            None => &self.themes[DEFAULT_THEME],
        }
    }

    /// Sorted list of theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's chrome colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.background;
        visuals.override_text_color = Some(colors.text);
        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn day_theme() -> Theme {
    Theme {
        name: "Day".to_string(),
        colors: MapColors {
            background: hex_to_color32("#f2efe9"),
            grid: with_alpha(hex_to_color32("#8c8c8c"), 90),
            grid_text: hex_to_color32("#6e6e6e"),

            panel_background: Color32::from_rgb(248, 248, 248),
            text: Color32::from_rgb(0, 0, 0),

            ils_symbol: hex_to_color32("#006400"),
            ils_text: hex_to_color32("#004000"),
        },
    }
}

fn night_theme() -> Theme {
    Theme {
        name: "Night".to_string(),
        colors: MapColors {
            background: hex_to_color32("#1b1d23"),
            grid: with_alpha(hex_to_color32("#5c6370"), 90),
            grid_text: hex_to_color32("#5c6370"),

            panel_background: Color32::from_rgb(39, 39, 39),
            text: Color32::from_rgb(220, 220, 220),

            ils_symbol: hex_to_color32("#50c878"),
            ils_text: hex_to_color32("#98c379"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#006400"), Color32::from_rgb(0, 100, 0));
        assert_eq!(hex_to_color32("bad"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Day", "Night"]);
        assert_eq!(manager.theme_or_default("Solarized").name, DEFAULT_THEME);
        assert_eq!(manager.theme_or_default("Night").name, "Night");
    }
}
