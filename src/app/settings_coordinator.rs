//! Settings persistence coordination.
//!
//! Settings are stored in eframe storage as JSON strings, one key per settings
//! group. The map layer table can be overridden by a JSON file in the user's
//! configuration directory.

use std::path::PathBuf;

use ilsmap::{DisplayOptions, MapLayerSettings, RendererSettings};
use serde::{Deserialize, Serialize};

use crate::state::MapViewSettings;

const DISPLAY_OPTIONS_KEY: &str = "display_options";
const RENDERER_SETTINGS_KEY: &str = "renderer_settings";
const MAP_VIEW_KEY: &str = "map_view";

/// Directory under the user configuration directory
const CONFIG_DIR_NAME: &str = "ils-viewer";
const LAYER_FILE_NAME: &str = "layers.json";

/// All persisted viewer settings except the theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerSettings {
    pub options: DisplayOptions,
    pub renderer: RendererSettings,
    pub map_view: MapViewSettings,
}

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads all viewer settings, falling back to defaults per group.
    pub fn load_viewer_settings(storage: Option<&dyn eframe::Storage>) -> ViewerSettings {
        ViewerSettings {
            options: Self::load_setting(storage, DISPLAY_OPTIONS_KEY),
            renderer: Self::load_setting(storage, RENDERER_SETTINGS_KEY),
            map_view: Self::load_setting(storage, MAP_VIEW_KEY),
        }
    }

    /// Saves all viewer settings.
    pub fn save_viewer_settings(storage: &mut dyn eframe::Storage, settings: &ViewerSettings) {
        Self::save_setting(storage, DISPLAY_OPTIONS_KEY, &settings.options);
        Self::save_setting(storage, RENDERER_SETTINGS_KEY, &settings.renderer);
        Self::save_setting(storage, MAP_VIEW_KEY, &settings.map_view);
    }

    /// Loads a setting from persistent storage with a default fallback.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the default value for type T
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Ignoring invalid stored setting");
                None
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(e) => tracing::warn!(key, error = %e, "Failed to serialize setting"),
        }
    }

    /// Path of the optional layer table override.
    pub fn layer_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(LAYER_FILE_NAME))
    }

    /// Loads the layer table override if present, otherwise the built-in table.
    pub fn load_layer_settings() -> MapLayerSettings {
        let Some(path) = Self::layer_file_path().filter(|p| p.exists()) else {
            return MapLayerSettings::default();
        };

        match MapLayerSettings::from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Using built-in map layers: {e:#}");
                MapLayerSettings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilsmap::GeoPos;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_viewer_settings_round_trip() {
        let mut storage = MockStorage::new();
        let settings = ViewerSettings {
            options: DisplayOptions {
                show_ils: false,
                verbose: true,
            },
            renderer: RendererSettings {
                font_size: 14.0,
                ..Default::default()
            },
            map_view: MapViewSettings {
                center: GeoPos::new(-122.37, 37.62),
                zoom: 10.0,
            },
        };

        SettingsCoordinator::save_viewer_settings(&mut storage, &settings);
        let loaded = SettingsCoordinator::load_viewer_settings(Some(&storage));
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_storage_gives_defaults() {
        let loaded = SettingsCoordinator::load_viewer_settings(None);
        assert_eq!(loaded, ViewerSettings::default());
    }

    #[test]
    fn test_invalid_setting_falls_back() {
        let mut storage = MockStorage::new();
        storage.set_string_raw(DISPLAY_OPTIONS_KEY, "{broken");
        let options: DisplayOptions = SettingsCoordinator::load_setting(Some(&storage), DISPLAY_OPTIONS_KEY);
        assert_eq!(options, DisplayOptions::default());
    }

    impl MockStorage {
        fn set_string_raw(&mut self, key: &str, value: &str) {
            self.data.insert(key.to_string(), value.to_string());
        }
    }
}
