//! Map view and zoom state management.
//!
//! This module encapsulates the visible map area: center, zoom level and the
//! screen rectangle the map is painted into.

use egui::{Pos2, Rect, Vec2};
use ilsmap::{GeoPos, MapProjection, MercatorProjection};
use serde::{Deserialize, Serialize};

/// Zoom limits of the map
pub const MIN_ZOOM: f64 = 3.0;
pub const MAX_ZOOM: f64 = 18.0;

/// Persisted part of the map view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewSettings {
    pub center: GeoPos,
    pub zoom: f64,
}

impl Default for MapViewSettings {
    fn default() -> Self {
        Self {
            // Frankfurt area
            center: GeoPos::new(8.57, 50.03),
            zoom: 8.0,
        }
    }
}

/// State of the visible map area.
///
/// Responsibilities:
/// - Owning the projection used by all map painters
/// - Panning and zooming with enforced zoom limits
#[derive(Debug, Clone)]
pub struct MapViewState {
    projection: MercatorProjection,
}

impl Default for MapViewState {
    fn default() -> Self {
        Self::new(MapViewSettings::default())
    }
}

impl MapViewState {
    pub fn new(settings: MapViewSettings) -> Self {
        let zoom = settings.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        Self {
            projection: MercatorProjection::new(settings.center, zoom, Rect::ZERO),
        }
    }

    // ===== View Queries =====

    pub fn projection(&self) -> &MercatorProjection {
        &self.projection
    }

    pub fn zoom(&self) -> f64 {
        self.projection.zoom()
    }

    pub fn settings(&self) -> MapViewSettings {
        MapViewSettings {
            center: self.projection.center(),
            zoom: self.projection.zoom(),
        }
    }

    // ===== View Mutations =====

    /// Sets the screen rectangle the map is painted into.
    pub fn set_screen_rect(&mut self, rect: Rect) {
        self.projection.set_screen_rect(rect);
    }

    /// Moves the map content by a screen-space delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.projection.pan(delta);
    }

    /// Zooms by `delta` levels keeping `focus` fixed on screen.
    pub fn zoom_around(&mut self, delta: f64, focus: Pos2) {
        self.projection.zoom_around(delta, focus, MIN_ZOOM, MAX_ZOOM);
    }

    /// Zooms by `delta` levels around the screen center.
    pub fn zoom_by(&mut self, delta: f64) {
        let center = self.projection.screen_rect().center();
        self.zoom_around(delta, center);
    }

    /// Returns to the default view.
    pub fn reset(&mut self) {
        let rect = self.projection.screen_rect();
        *self = Self::default();
        self.projection.set_screen_rect(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_is_clamped() {
        let mut view = MapViewState::new(MapViewSettings {
            center: GeoPos::new(0.0, 0.0),
            zoom: 30.0,
        });
        assert_eq!(view.zoom(), MAX_ZOOM);

        view.set_screen_rect(Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 300.0)));
        view.zoom_by(-100.0);
        assert_eq!(view.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_zoom_range_spans_default_layers() {
        let layers = ilsmap::MapLayerSettings::default();
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(1200.0, 800.0));

        let mut view = MapViewState::default();
        view.set_screen_rect(rect);

        view.zoom_by(MAX_ZOOM);
        let closest = layers.layer_for_distance(view.projection().view_distance_km()).unwrap();
        assert!(closest.airport_diagram);

        view.zoom_by(-MAX_ZOOM);
        let widest = layers.layer_for_distance(view.projection().view_distance_km()).unwrap();
        assert!(!widest.ils);
    }

    #[test]
    fn test_reset_keeps_screen_rect() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 300.0));
        let mut view = MapViewState::default();
        view.set_screen_rect(rect);
        view.pan(Vec2::new(50.0, 0.0));
        view.reset();
        assert_eq!(view.settings(), MapViewSettings::default());
        assert_eq!(view.projection().screen_rect(), rect);
    }
}
