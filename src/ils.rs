//! ILS record data model.

use serde::{Deserialize, Serialize};

use crate::geo::{nm_to_meter, opposed_course, GeoPos, GeoRect};

/// Length of the localizer feather in nautical miles
pub const ILS_FEATHER_LEN_NM: f32 = 9.0;

/// Fraction of the feather length at which the notch point sits
const FEATHER_NOTCH_RATIO: f64 = 0.8;

/// A localizer with optional glideslope and DME, as returned by an [`crate::IlsQuery`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IlsRecord {
    pub ident: String,
    /// Frequency in kHz
    pub frequency: u32,
    /// Localizer course in degrees true
    pub heading: f32,
    pub magvar: f32,
    /// Glideslope angle in degrees, 0 if there is no glideslope
    pub slope: f32,
    /// Localizer beam width in degrees
    pub width: f32,
    pub dme: bool,
    pub position: GeoPos,
    /// Beam edge on the `heading + 180 + width / 2` side
    pub pos1: GeoPos,
    /// Beam edge on the `heading + 180 - width / 2` side
    pub pos2: GeoPos,
    pub posmid: GeoPos,
    pub bounding: GeoRect,
}

impl IlsRecord {
    /// Creates a record and computes its feather outline and bounding box.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ident: impl Into<String>,
        frequency: u32,
        heading: f32,
        magvar: f32,
        slope: f32,
        width: f32,
        dme: bool,
        position: GeoPos,
    ) -> Self {
        let feather_len = nm_to_meter(ILS_FEATHER_LEN_NM) as f64;
        let back_course = opposed_course(heading) as f64;
        let half_width = (width / 2.0) as f64;

        let pos1 = position.endpoint(feather_len, back_course + half_width);
        let pos2 = position.endpoint(feather_len, back_course - half_width);
        let posmid = position.endpoint(feather_len * FEATHER_NOTCH_RATIO, back_course);

        let bounding = GeoRect::from_points(&[position, pos1, pos2, posmid])
            .unwrap_or(GeoRect::new(position.lat, position.lat, position.lon, position.lon));

        Self {
            ident: ident.into(),
            frequency,
            heading,
            magvar,
            slope,
            width,
            dme,
            position,
            pos1,
            pos2,
            posmid,
            bounding,
        }
    }

    pub fn has_glideslope(&self) -> bool {
        self.slope > 0.0
    }

    /// Frequency in MHz
    pub fn frequency_mhz(&self) -> f64 {
        self.frequency as f64 / 1000.0
    }
}
