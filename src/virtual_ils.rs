use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geo::{GeoPos, GeoRect};
use crate::ils::IlsRecord;

const DEFAULT_COUNT: usize = 400;
const DEFAULT_SEED: u64 = 42;

/// Generates plausible ILS records scattered over a region.
pub struct VirtualIlsGenerator {
    region: GeoRect,
    count: usize,
    seed: u64,
}

impl VirtualIlsGenerator {
    pub fn new() -> Self {
        Self {
            // Central Europe
            region: GeoRect::new(55.0, 44.0, 20.0, -2.0),
            count: DEFAULT_COUNT,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_config(region: GeoRect, count: usize, seed: u64) -> Self {
        Self { region, count, seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&self) -> Vec<IlsRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.count).map(|i| self.generate_one(&mut rng, i)).collect()
    }

    fn generate_one(&self, rng: &mut StdRng, index: usize) -> IlsRecord {
        let lat = rng.gen_range(self.region.south..=self.region.north);
        let lon_offset = rng.gen_range(0.0..=self.region.width_deg());
        let lon = crate::geo::normalize_lon(self.region.west + lon_offset);

        // Runway directions come in steps of 10 degrees plus a few degrees of local offset
        let heading = (rng.gen_range(0..36) * 10) as f32 + rng.gen_range(-4.0..4.0);
        let heading = crate::geo::normalize_course(heading);
        let magvar = rng.gen_range(-5.0f32..5.0).round();

        // ILS localizers are on 50 kHz spacing between 108.10 and 111.95 MHz
        let frequency = 108_100 + rng.gen_range(0..78) * 50;

        let slope = if rng.gen_bool(0.85) {
            [2.5f32, 3.0, 3.0, 3.0, 3.2, 3.5][rng.gen_range(0..6)]
        } else {
            0.0
        };
        let width = rng.gen_range(3.0f32..6.0);
        let dme = rng.gen_bool(0.5);

        let ident = format!(
            "I{}{}",
            (b'A' + (index % 26) as u8) as char,
            (b'A' + ((index / 26) % 26) as u8) as char
        );

        IlsRecord::new(ident, frequency, heading, magvar, slope, width, dme, GeoPos::new(lon, lat))
    }
}

impl Default for VirtualIlsGenerator {
    fn default() -> Self {
        Self::new()
    }
}
