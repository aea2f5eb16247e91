//! Output capability for placed points.
//!
//! The engine hands every successfully placed point to a [`PointCollector`].
//! In the full application that collector is the map's cluster layer, which
//! owns rendering, clustering-by-zoom, and click handling. The engine never
//! depends on rendering types, only on this one-method seam.
//!
//! Collectors must not be relied on for deduplication; by the time a point
//! reaches `add_point` its position key is already unique in the registry.

use crate::report::PlacedPoint;

/// Consumer of successfully placed points.
///
/// Invoked exactly once per placed report, after the registry insert.
pub trait PointCollector {
    /// Accept a point with a unique coordinate and its display metadata.
    fn add_point(&mut self, point: &PlacedPoint);
}

/// Collector that buffers every point in memory.
///
/// The CLI renders its output from one of these; tests use it to observe
/// the exact handoff sequence.
#[derive(Debug, Default)]
pub struct VecCollector {
    points: Vec<PlacedPoint>,
}

impl VecCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// All collected points, in placement order.
    pub fn points(&self) -> &[PlacedPoint] {
        &self.points
    }

    /// Number of collected points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consume the collector, yielding the points.
    pub fn into_points(self) -> Vec<PlacedPoint> {
        self.points
    }
}

impl PointCollector for VecCollector {
    fn add_point(&mut self, point: &PlacedPoint) {
        self.points.push(point.clone());
    }
}

/// Collector that discards every point.
///
/// Useful when only the registry side effects matter.
#[derive(Debug, Default)]
pub struct NullCollector;

impl PointCollector for NullCollector {
    fn add_point(&mut self, _point: &PlacedPoint) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::GeoPoint;
    use crate::report::ReportMeta;

    fn point(lat: f64, lon: f64) -> PlacedPoint {
        let position = GeoPoint::new(lat, lon);
        PlacedPoint::new(position, position, ReportMeta::default())
    }

    #[test]
    fn test_vec_collector_preserves_order() {
        let mut collector = VecCollector::new();
        collector.add_point(&point(52.5, 13.4));
        collector.add_point(&point(55.9, -4.3));

        assert_eq!(collector.len(), 2);
        assert_eq!(collector.points()[0].position().lat, 52.5);
        assert_eq!(collector.points()[1].position().lat, 55.9);
    }

    #[test]
    fn test_vec_collector_starts_empty() {
        let collector = VecCollector::new();
        assert!(collector.is_empty());
        assert_eq!(collector.len(), 0);
    }

    #[test]
    fn test_vec_collector_into_points() {
        let mut collector = VecCollector::new();
        collector.add_point(&point(52.5, 13.4));
        let points = collector.into_points();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_null_collector_discards() {
        let mut collector = NullCollector;
        collector.add_point(&point(52.5, 13.4)); // Should not panic
    }
}
