//! Map detail layers.
//!
//! A [`MapLayer`] tells painters which detail to show at the current zoom.
//! [`MapLayerSettings`] holds the zoom-indexed table of layers.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Detail descriptor for one zoom range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapLayer {
    /// Layer applies up to this view distance in kilometers
    pub max_range_km: f32,
    /// Layer shows an airport diagram instead of the overview map
    pub airport_diagram: bool,
    /// Show ILS symbols at all
    pub ils: bool,
    /// Label ILS symbols with their ident
    pub ils_ident: bool,
    /// Label ILS symbols with ident, frequency, course, glideslope and DME
    pub ils_info: bool,
}

impl Default for MapLayer {
    fn default() -> Self {
        Self {
            max_range_km: f32::MAX,
            airport_diagram: false,
            ils: false,
            ils_ident: false,
            ils_info: false,
        }
    }
}

impl MapLayer {
    pub fn new(max_range_km: f32) -> Self {
        Self {
            max_range_km,
            ..Default::default()
        }
    }

    pub fn airport_diagram(mut self, value: bool) -> Self {
        self.airport_diagram = value;
        self
    }

    pub fn ils(mut self, value: bool) -> Self {
        self.ils = value;
        self
    }

    pub fn ils_ident(mut self, value: bool) -> Self {
        self.ils_ident = value;
        self
    }

    pub fn ils_info(mut self, value: bool) -> Self {
        self.ils_info = value;
        self
    }
}

/// Ordered table of layers, smallest range first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayerSettings {
    layers: Vec<MapLayer>,
}

impl Default for MapLayerSettings {
    fn default() -> Self {
        Self::new(vec![
            MapLayer::new(1.0).airport_diagram(true).ils(true).ils_info(true),
            MapLayer::new(50.0).ils(true).ils_info(true),
            MapLayer::new(150.0).ils(true).ils_ident(true),
            MapLayer::new(300.0).ils(true),
            MapLayer::new(f32::MAX),
        ])
    }
}

impl MapLayerSettings {
    /// Creates a table from layers in any order.
    pub fn new(mut layers: Vec<MapLayer>) -> Self {
        layers.sort_by(|a, b| a.max_range_km.total_cmp(&b.max_range_km));
        Self { layers }
    }

    /// Parses a JSON layer table.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let settings: MapLayerSettings =
            serde_json::from_str(json).context("Invalid map layer table")?;
        anyhow::ensure!(!settings.layers.is_empty(), "Map layer table is empty");
        Ok(Self::new(settings.layers))
    }

    /// Loads a JSON layer table from a file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let settings = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), layers = settings.layers.len(), "Loaded map layer table");
        Ok(settings)
    }

    pub fn layers(&self) -> &[MapLayer] {
        &self.layers
    }

    /// Returns the layer for a view distance: the first one whose range covers
    /// the distance, or the widest layer beyond the table.
    pub fn layer_for_distance(&self, distance_km: f32) -> Option<&MapLayer> {
        self.layers
            .iter()
            .find(|layer| distance_km <= layer.max_range_km)
            .or_else(|| self.layers.last())
    }
}
