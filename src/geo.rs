//! Geographic primitives for the map layer.
//!
//! Positions and rectangles are kept in degrees. Rectangles may cross the
//! antimeridian, in which case `west > east`.

use serde::{Deserialize, Serialize};

/// Earth radius in meters (WGS-84 mean radius)
pub const EARTH_RADIUS_METER: f64 = 6_371_008.8;

/// Meters per nautical mile
pub const METER_PER_NM: f32 = 1852.0;

/// Converts nautical miles to meters.
pub fn nm_to_meter(nm: f32) -> f32 {
    nm * METER_PER_NM
}

/// Normalizes a course into the range `[0, 360)`.
pub fn normalize_course(course: f32) -> f32 {
    let course = course.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if course >= 360.0 {
        0.0
    } else {
        course
    }
}

/// Returns the reciprocal of a course, normalized to `[0, 360)`.
pub fn opposed_course(course: f32) -> f32 {
    normalize_course(course + 180.0)
}

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPos {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPos {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns the position reached after travelling `distance_meter` from this
    /// position on the great circle with initial bearing `bearing_deg`.
    pub fn endpoint(&self, distance_meter: f64, bearing_deg: f64) -> GeoPos {
        let angular_distance = distance_meter / EARTH_RADIUS_METER;
        let bearing = bearing_deg.to_radians();

        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();

        let lat2 = (lat1.sin() * angular_distance.cos()
            + lat1.cos() * angular_distance.sin() * bearing.cos())
        .asin();

        let lon2 = lon1
            + (bearing.sin() * angular_distance.sin() * lat1.cos())
                .atan2(angular_distance.cos() - lat1.sin() * lat2.sin());

        GeoPos::new(normalize_lon(lon2.to_degrees()), lat2.to_degrees())
    }
}

/// Wraps a longitude into `[-180, 180]`.
pub fn normalize_lon(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// A geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoRect {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoRect {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self { north, south, east, west }
    }

    /// Smallest rectangle enclosing all points. Returns `None` for an empty slice.
    ///
    /// The longitude span is chosen so that it crosses the antimeridian when
    /// that gives the narrower box.
    pub fn from_points(points: &[GeoPos]) -> Option<GeoRect> {
        let first = points.first()?;
        let mut rect = GeoRect::new(first.lat, first.lat, first.lon, first.lon);
        for p in &points[1..] {
            rect.north = rect.north.max(p.lat);
            rect.south = rect.south.min(p.lat);
        }

        let min_lon = points.iter().map(|p| p.lon).fold(f64::INFINITY, f64::min);
        let max_lon = points.iter().map(|p| p.lon).fold(f64::NEG_INFINITY, f64::max);

        // Shifted copy of the eastern hemisphere gives the antimeridian span
        let wrapped: Vec<f64> = points
            .iter()
            .map(|p| if p.lon < 0.0 { p.lon + 360.0 } else { p.lon })
            .collect();
        let wrapped_min = wrapped.iter().copied().fold(f64::INFINITY, f64::min);
        let wrapped_max = wrapped.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if wrapped_max - wrapped_min < max_lon - min_lon {
            rect.west = normalize_lon(wrapped_min);
            rect.east = normalize_lon(wrapped_max);
        } else {
            rect.west = min_lon;
            rect.east = max_lon;
        }
        Some(rect)
    }

    /// Returns true if the rectangle wraps around the antimeridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    /// Longitude span in degrees.
    pub fn width_deg(&self) -> f64 {
        if self.crosses_antimeridian() {
            self.east + 360.0 - self.west
        } else {
            self.east - self.west
        }
    }

    /// Latitude span in degrees.
    pub fn height_deg(&self) -> f64 {
        self.north - self.south
    }

    pub fn center(&self) -> GeoPos {
        let lon = normalize_lon(self.west + self.width_deg() / 2.0);
        GeoPos::new(lon, (self.north + self.south) / 2.0)
    }

    pub fn contains(&self, pos: GeoPos) -> bool {
        if pos.lat > self.north || pos.lat < self.south {
            return false;
        }
        lon_intervals(self)
            .iter()
            .any(|(w, e)| pos.lon >= *w && pos.lon <= *e)
    }

    /// Returns true if `other` lies completely inside this rectangle.
    pub fn contains_rect(&self, other: &GeoRect) -> bool {
        if other.north > self.north || other.south < self.south {
            return false;
        }
        let ours = lon_intervals(self);
        lon_intervals(other)
            .iter()
            .all(|(w2, e2)| ours.iter().any(|(w1, e1)| w1 <= w2 && e2 <= e1))
    }

    /// Grows the rectangle by `margin_deg` on every side, clamping latitude and
    /// keeping longitude spans below a full turn.
    pub fn inflated(&self, margin_deg: f64) -> GeoRect {
        let north = (self.north + margin_deg).min(90.0);
        let south = (self.south - margin_deg).max(-90.0);
        if self.width_deg() + 2.0 * margin_deg >= 360.0 {
            return GeoRect::new(north, south, 180.0, -180.0);
        }
        GeoRect::new(
            north,
            south,
            normalize_lon(self.east + margin_deg),
            normalize_lon(self.west - margin_deg),
        )
    }

    /// Returns true if both rectangles share at least one point.
    pub fn intersects(&self, other: &GeoRect) -> bool {
        if self.south > other.north || self.north < other.south {
            return false;
        }

        let ours = lon_intervals(self);
        let theirs = lon_intervals(other);
        ours.iter().any(|(w1, e1)| {
            theirs.iter().any(|(w2, e2)| w1 <= e2 && w2 <= e1)
        })
    }
}

/// Splits a rectangle's longitude span into non-wrapping intervals.
fn lon_intervals(rect: &GeoRect) -> Vec<(f64, f64)> {
    if rect.crosses_antimeridian() {
        vec![(rect.west, 180.0), (-180.0, rect.east)]
    } else {
        vec![(rect.west, rect.east)]
    }
}
