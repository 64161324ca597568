//! Latitude/longitude grid rendering
//!
//! Draws graticule lines with degree labels behind the navaid symbols.

use eframe::egui;
use ilsmap::{GeoPos, MapColors, MapProjection, MercatorProjection};

/// Candidate grid spacings in degrees
const GRID_STEPS_DEG: [f64; 9] = [0.1, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0, 15.0, 30.0];

/// Aim for at most this many grid lines across the view
const MAX_GRID_LINES: f64 = 12.0;

/// Returns the smallest grid step that keeps the line count for `span_deg` in bounds.
pub fn grid_step_deg(span_deg: f64) -> f64 {
    GRID_STEPS_DEG
        .iter()
        .copied()
        .find(|step| span_deg / step <= MAX_GRID_LINES)
        .unwrap_or(GRID_STEPS_DEG[GRID_STEPS_DEG.len() - 1])
}

/// Formats a latitude like `50°N` or `50.5°S`.
pub fn format_lat(lat: f64, step: f64) -> String {
    let hemisphere = if lat < 0.0 { 'S' } else { 'N' };
    format!("{}°{}", format_degrees(lat.abs(), step), hemisphere)
}

/// Formats a longitude like `8°E` or `122.25°W`.
pub fn format_lon(lon: f64, step: f64) -> String {
    let hemisphere = if lon < 0.0 { 'W' } else { 'E' };
    format!("{}°{}", format_degrees(lon.abs(), step), hemisphere)
}

fn format_degrees(value: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{:.0}", value)
    } else if step >= 0.5 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Renders the graticule over the map rectangle
///
/// # Arguments
/// * `painter` - Painter clipped to the map rectangle
/// * `projection` - Current map projection
/// * `colors` - Palette of the current theme
pub fn render_grid(painter: &egui::Painter, projection: &MercatorProjection, colors: &MapColors) {
    let rect = projection.screen_rect();
    let view = projection.view_box();
    let stroke = egui::Stroke::new(1.0, colors.grid);
    let font = egui::FontId::proportional(10.0);

    let step = grid_step_deg(view.width_deg().max(view.height_deg()));

    // Meridians
    let first_lon = (view.west / step).ceil() * step;
    let mut offset = first_lon - view.west;
    while offset <= view.width_deg() {
        let lon = ilsmap::geo::normalize_lon(view.west + offset);
        let x = projection.world_to_screen(GeoPos::new(lon, view.center().lat), egui::Vec2::ZERO).point.x;
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
        painter.text(
            egui::pos2(x + 3.0, rect.bottom() - 3.0),
            egui::Align2::LEFT_BOTTOM,
            format_lon(lon, step),
            font.clone(),
            colors.grid_text,
        );
        offset += step;
    }

    // Parallels
    let mut lat = (view.south / step).ceil() * step;
    while lat <= view.north {
        let y = projection.world_to_screen(GeoPos::new(view.center().lon, lat), egui::Vec2::ZERO).point.y;
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        painter.text(
            egui::pos2(rect.left() + 3.0, y - 2.0),
            egui::Align2::LEFT_BOTTOM,
            format_lat(lat, step),
            font.clone(),
            colors.grid_text,
        );
        lat += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_step_deg() {
        assert_eq!(grid_step_deg(1.0), 0.1);
        assert_eq!(grid_step_deg(6.0), 0.5);
        assert_eq!(grid_step_deg(20.0), 2.0);
        assert_eq!(grid_step_deg(1000.0), 30.0);
    }

    #[test]
    fn test_format_coordinates() {
        assert_eq!(format_lat(50.0, 1.0), "50°N");
        assert_eq!(format_lat(-33.5, 0.5), "33.5°S");
        assert_eq!(format_lon(-122.25, 0.25), "122.25°W");
        assert_eq!(format_lon(8.0, 2.0), "8°E");
    }
}
