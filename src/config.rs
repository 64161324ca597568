//! Persisted display options.

use serde::{Deserialize, Serialize};

/// Which map object types are shown and how much the painters report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// ILS object type display
    pub show_ils: bool,
    /// Log query and paint diagnostics for still frames
    pub verbose: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_ils: true,
            verbose: false,
        }
    }
}

/// Pen widths and label font of the ILS painter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    pub symbol_line_width: f32,
    pub text_line_width: f32,
    pub font_size: f32,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            symbol_line_width: 2.0,
            text_line_width: 0.5,
            font_size: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let options: DisplayOptions = serde_json::from_str(r#"{"verbose": true}"#).unwrap();
        assert!(options.show_ils);
        assert!(options.verbose);

        let settings: RendererSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, RendererSettings::default());
    }
}
