//! World to screen projection.
//!
//! [`MapProjection`] is the seam the renderer uses for coordinate mapping and
//! distance scaling. [`MercatorProjection`] implements it for a flat
//! Web-Mercator map centered on a geographic position.

use std::f64::consts::PI;

use egui::{Pos2, Rect, Vec2};

use crate::geo::{GeoPos, GeoRect};

/// Size of a world tile at zoom 0 in pixels
const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the Web-Mercator projection
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Length of one degree of latitude
const KM_PER_DEG: f64 = 111.32;

/// A projected point and whether it falls onto the visible screen area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPos {
    pub point: Pos2,
    pub visible: bool,
}

/// Coordinate mapping and scale service for map painters.
pub trait MapProjection {
    /// Projects a position to screen coordinates. The point counts as visible
    /// when it lies on screen or within `margin` pixels of the screen edge.
    fn world_to_screen(&self, pos: GeoPos, margin: Vec2) -> ScreenPos;

    /// Size in pixels that `rect` covers on screen.
    fn screen_size_for_rect(&self, rect: &GeoRect) -> Vec2;

    /// Length in pixels of a real-world distance measured along `direction_deg`
    /// from the screen center.
    fn pixel_for_meter(&self, meters: f32, direction_deg: f32) -> f32;

    /// The visible screen rectangle.
    fn screen_rect(&self) -> Rect;

    /// The geographic area covered by the screen.
    fn view_box(&self) -> GeoRect;
}

/// Web-Mercator projection of a map centered on `center` at fractional `zoom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorProjection {
    center: GeoPos,
    zoom: f64,
    screen_rect: Rect,
}

impl MercatorProjection {
    pub fn new(center: GeoPos, zoom: f64, screen_rect: Rect) -> Self {
        Self {
            center,
            zoom,
            screen_rect,
        }
    }

    pub fn center(&self) -> GeoPos {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    fn world_size(&self) -> f64 {
        TILE_SIZE * 2f64.powf(self.zoom)
    }

    /// Position in world pixels, origin at the top left of the world map.
    fn to_world(&self, pos: GeoPos) -> (f64, f64) {
        let size = self.world_size();
        let lat = pos.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (pos.lon + 180.0) / 360.0 * size;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
        (x, y)
    }

    fn from_world(&self, x: f64, y: f64) -> GeoPos {
        let size = self.world_size();
        let lon = x / size * 360.0 - 180.0;
        let n = PI * (1.0 - 2.0 * y / size);
        let lat = n.sinh().atan().to_degrees();
        GeoPos::new(crate::geo::normalize_lon(lon), lat.clamp(-MAX_LATITUDE, MAX_LATITUDE))
    }

    /// Maps a screen point back to a geographic position.
    pub fn screen_to_world(&self, point: Pos2) -> GeoPos {
        let (cx, cy) = self.to_world(self.center);
        let screen_center = self.screen_rect.center();
        self.from_world(
            cx + (point.x - screen_center.x) as f64,
            cy + (point.y - screen_center.y) as f64,
        )
    }

    /// Unwrapped screen point, without the visibility test.
    fn project(&self, pos: GeoPos) -> Pos2 {
        let (cx, cy) = self.to_world(self.center);
        let (mut x, y) = self.to_world(pos);

        // Pick the copy of the world closest to the center
        let size = self.world_size();
        let dx = x - cx;
        if dx > size / 2.0 {
            x -= size;
        } else if dx < -size / 2.0 {
            x += size;
        }

        let screen_center = self.screen_rect.center();
        Pos2::new(
            screen_center.x + (x - cx) as f32,
            screen_center.y + (y - cy) as f32,
        )
    }

    /// Longitude span of the screen in degrees, at most the whole world.
    fn lon_span_deg(&self) -> f64 {
        (self.screen_rect.width() as f64 / self.world_size() * 360.0).min(360.0)
    }

    /// Approximate view distance in kilometers, measured across the screen diagonal.
    pub fn view_distance_km(&self) -> f32 {
        let north = self.screen_to_world(self.screen_rect.center_top());
        let south = self.screen_to_world(self.screen_rect.center_bottom());
        let lat_km = (north.lat - south.lat).abs() * KM_PER_DEG;
        let lon_km = self.lon_span_deg() * KM_PER_DEG * self.center.lat.to_radians().cos();
        (lat_km.powi(2) + lon_km.powi(2)).sqrt() as f32
    }

    /// Moves the center by a screen-space delta.
    pub fn pan(&mut self, delta: Vec2) {
        let screen_center = self.screen_rect.center();
        self.center = self.screen_to_world(screen_center - delta);
    }

    /// Changes the zoom level keeping `focus` at the same screen position.
    pub fn zoom_around(&mut self, zoom_delta: f64, focus: Pos2, min_zoom: f64, max_zoom: f64) {
        let before = self.screen_to_world(focus);
        self.zoom = (self.zoom + zoom_delta).clamp(min_zoom, max_zoom);
        let after = self.project(before);
        self.pan(focus - after);
    }

    pub fn set_screen_rect(&mut self, screen_rect: Rect) {
        self.screen_rect = screen_rect;
    }
}

impl MapProjection for MercatorProjection {
    fn world_to_screen(&self, pos: GeoPos, margin: Vec2) -> ScreenPos {
        let point = self.project(pos);
        let visible = self.screen_rect.expand2(margin).contains(point);
        ScreenPos { point, visible }
    }

    fn screen_size_for_rect(&self, rect: &GeoRect) -> Vec2 {
        let top_left = self.project(GeoPos::new(rect.west, rect.north));
        let bottom_right = self.project(GeoPos::new(rect.west + rect.width_deg(), rect.south));
        Vec2::new(
            (bottom_right.x - top_left.x).abs(),
            (bottom_right.y - top_left.y).abs(),
        )
    }

    fn pixel_for_meter(&self, meters: f32, direction_deg: f32) -> f32 {
        let end = self.center.endpoint(meters as f64, direction_deg as f64);
        let from = self.project(self.center);
        let to = self.project(end);
        from.distance(to)
    }

    fn screen_rect(&self) -> Rect {
        self.screen_rect
    }

    fn view_box(&self) -> GeoRect {
        let top_left = self.screen_to_world(self.screen_rect.left_top());
        let bottom_right = self.screen_to_world(self.screen_rect.right_bottom());
        if self.lon_span_deg() >= 360.0 {
            return GeoRect::new(top_left.lat, bottom_right.lat, 180.0, -180.0);
        }
        GeoRect::new(top_left.lat, bottom_right.lat, bottom_right.lon, top_left.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection() -> MercatorProjection {
        MercatorProjection::new(
            GeoPos::new(8.5, 50.0),
            8.0,
            Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0)),
        )
    }

    #[test]
    fn test_center_projects_to_screen_center() {
        let proj = projection();
        let screen = proj.world_to_screen(GeoPos::new(8.5, 50.0), Vec2::ZERO);
        assert!(screen.visible);
        assert!((screen.point.x - 400.0).abs() < 1e-3);
        assert!((screen.point.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_far_point_not_visible_unless_margin() {
        let proj = projection();
        let east = GeoPos::new(8.5 + 360.0 / 2f64.powi(16), 50.0);
        // 256 * 2^8 pixels per 360 degrees, so this point sits 1 px right of center
        let screen = proj.world_to_screen(east, Vec2::ZERO);
        assert!((screen.point.x - 401.0).abs() < 1e-3);

        let outside = GeoPos::new(12.0, 50.0);
        assert!(!proj.world_to_screen(outside, Vec2::ZERO).visible);
        assert!(proj.world_to_screen(outside, Vec2::splat(3000.0)).visible);
    }

    #[test]
    fn test_screen_to_world_round_trip() {
        let proj = projection();
        let pos = proj.screen_to_world(Pos2::new(100.0, 500.0));
        let back = proj.world_to_screen(pos, Vec2::ZERO).point;
        assert!((back.x - 100.0).abs() < 1e-2);
        assert!((back.y - 500.0).abs() < 1e-2);
    }

    #[test]
    fn test_pixel_for_meter_scales_with_zoom() {
        let near = projection();
        let far = MercatorProjection::new(near.center(), near.zoom() - 1.0, near.screen_rect());
        let px_near = near.pixel_for_meter(10_000.0, 90.0);
        let px_far = far.pixel_for_meter(10_000.0, 90.0);
        assert!(px_near > 0.0);
        assert!((px_near / px_far - 2.0).abs() < 1e-2);
    }

    #[test]
    fn test_view_box_contains_center() {
        let proj = projection();
        let view = proj.view_box();
        assert!(view.contains(proj.center()));
        assert!(view.north > view.south);
        assert!(proj.view_distance_km() > 0.0);
    }

    fn fiji_view(center_lon: f64, zoom: f64) -> MercatorProjection {
        MercatorProjection::new(
            GeoPos::new(center_lon, -17.7),
            zoom,
            Rect::from_min_size(Pos2::ZERO, Vec2::new(1200.0, 800.0)),
        )
    }

    #[test]
    fn test_view_distance_at_zoom_levels() {
        let distance = fiji_view(178.0, 11.0).view_distance_km();
        assert!((distance - 105.0).abs() < 1.0, "distance {distance}");

        // Each zoom level halves the distance
        for zoom in 9..=15 {
            let near = fiji_view(178.0, zoom as f64 + 1.0).view_distance_km();
            let far = fiji_view(178.0, zoom as f64).view_distance_km();
            assert!((far / near - 2.0).abs() < 0.02, "zoom {zoom}: {far} vs {near}");
        }
    }

    #[test]
    fn test_view_distance_across_antimeridian() {
        for zoom in [6.0, 11.0, 16.0] {
            let greenwich = MercatorProjection::new(
                GeoPos::new(0.0, -17.7),
                zoom,
                Rect::from_min_size(Pos2::ZERO, Vec2::new(1200.0, 800.0)),
            );
            let fiji = fiji_view(179.99, zoom);
            assert!(fiji.view_box().crosses_antimeridian());

            let a = greenwich.view_distance_km();
            let b = fiji.view_distance_km();
            assert!((a - b).abs() / a < 1e-3, "zoom {zoom}: {a} vs {b}");
        }
    }

    #[test]
    fn test_zoom_around_keeps_focus() {
        let mut proj = projection();
        let focus = Pos2::new(200.0, 150.0);
        let before = proj.screen_to_world(focus);
        proj.zoom_around(1.0, focus, 2.0, 18.0);
        assert_eq!(proj.zoom(), 9.0);
        let after = proj.world_to_screen(before, Vec2::ZERO).point;
        assert!((after.x - focus.x).abs() < 0.5);
        assert!((after.y - focus.y).abs() < 0.5);
    }
}
