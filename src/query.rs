//! Spatial queries for ILS records.

use crate::geo::GeoRect;
use crate::ils::IlsRecord;
use crate::layer::MapLayer;

/// Extra margin around the requested rectangle in degrees so that small pans
/// are served from the cache.
const QUERY_MARGIN_DEG: f64 = 0.5;

/// Source of ILS records for a map viewport.
pub trait IlsQuery {
    /// Returns all records whose extent intersects `rect` for the given layer.
    ///
    /// With `lazy` set the implementation may return stale results from a
    /// previous query instead of doing fresh work. `None` means nothing is
    /// available for this layer.
    fn query_ils(&mut self, rect: &GeoRect, layer: &MapLayer, lazy: bool) -> Option<&[IlsRecord]>;
}

/// Result of the last query together with the inputs that produced it.
#[derive(Debug, Default)]
struct IlsCache {
    rect: Option<GeoRect>,
    layer: Option<MapLayer>,
    records: Vec<IlsRecord>,
}

impl IlsCache {
    fn covers(&self, rect: &GeoRect, layer: &MapLayer) -> bool {
        match (&self.rect, &self.layer) {
            (Some(cached_rect), Some(cached_layer)) => {
                cached_layer == layer && cached_rect.contains_rect(rect)
            }
            _ => false,
        }
    }

    fn is_filled(&self) -> bool {
        self.rect.is_some()
    }
}

/// Query over records held in memory, caching the last result.
#[derive(Debug, Default)]
pub struct MemoryIlsQuery {
    records: Vec<IlsRecord>,
    cache: IlsCache,
    /// Number of times the record list was scanned
    scans: usize,
}

impl MemoryIlsQuery {
    pub fn new(records: Vec<IlsRecord>) -> Self {
        Self {
            records,
            cache: IlsCache::default(),
            scans: 0,
        }
    }

    pub fn records(&self) -> &[IlsRecord] {
        &self.records
    }

    /// Replaces the records and drops the cache.
    pub fn set_records(&mut self, records: Vec<IlsRecord>) {
        self.records = records;
        self.clear_cache();
    }

    pub fn clear_cache(&mut self) {
        self.cache = IlsCache::default();
    }

    pub fn scan_count(&self) -> usize {
        self.scans
    }
}

impl IlsQuery for MemoryIlsQuery {
    fn query_ils(&mut self, rect: &GeoRect, layer: &MapLayer, lazy: bool) -> Option<&[IlsRecord]> {
        if !layer.ils {
            return None;
        }

        let reuse = self.cache.covers(rect, layer) || (lazy && self.cache.is_filled());
        if !reuse {
            let query_rect = rect.inflated(QUERY_MARGIN_DEG);
            self.cache.records = self
                .records
                .iter()
                .filter(|ils| ils.bounding.intersects(&query_rect))
                .cloned()
                .collect();
            self.cache.rect = Some(query_rect);
            self.cache.layer = Some(layer.clone());
            self.scans += 1;
        }

        Some(&self.cache.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPos;

    fn sample_records() -> Vec<IlsRecord> {
        vec![
            IlsRecord::new("IAAA", 110_100, 90.0, 0.0, 3.0, 4.0, false, GeoPos::new(1.0, 1.0)),
            IlsRecord::new("IBBB", 110_300, 270.0, 0.0, 0.0, 4.0, true, GeoPos::new(20.0, 20.0)),
        ]
    }

    #[test]
    fn test_query_filters_by_rect() {
        let mut query = MemoryIlsQuery::new(sample_records());
        let layer = MapLayer::new(100.0).ils(true);
        let rect = GeoRect::new(3.0, 0.0, 3.0, 0.0);

        let result = query.query_ils(&rect, &layer, false).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].ident, "IAAA");
    }

    #[test]
    fn test_query_without_ils_layer_returns_none() {
        let mut query = MemoryIlsQuery::new(sample_records());
        let layer = MapLayer::new(100.0);
        assert!(query.query_ils(&GeoRect::new(90.0, -90.0, 180.0, -180.0), &layer, false).is_none());
    }

    #[test]
    fn test_query_reuses_cache_for_contained_rect() {
        let mut query = MemoryIlsQuery::new(sample_records());
        let layer = MapLayer::new(100.0).ils(true);

        query.query_ils(&GeoRect::new(3.0, 0.0, 3.0, 0.0), &layer, false);
        query.query_ils(&GeoRect::new(2.9, 0.1, 2.9, 0.1), &layer, false);
        assert_eq!(query.scan_count(), 1);

        // A different layer invalidates the cache
        let other = MapLayer::new(100.0).ils(true).ils_info(true);
        query.query_ils(&GeoRect::new(2.9, 0.1, 2.9, 0.1), &other, false);
        assert_eq!(query.scan_count(), 2);
    }

    #[test]
    fn test_lazy_query_returns_stale_results() {
        let mut query = MemoryIlsQuery::new(sample_records());
        let layer = MapLayer::new(100.0).ils(true);

        query.query_ils(&GeoRect::new(3.0, 0.0, 3.0, 0.0), &layer, false);
        let stale = query.query_ils(&GeoRect::new(22.0, 18.0, 22.0, 18.0), &layer, true).unwrap();
        assert_eq!(stale[0].ident, "IAAA");
        assert_eq!(query.scan_count(), 1);

        let fresh = query.query_ils(&GeoRect::new(22.0, 18.0, 22.0, 18.0), &layer, false).unwrap();
        assert_eq!(fresh[0].ident, "IBBB");
        assert_eq!(query.scan_count(), 2);
    }
}
