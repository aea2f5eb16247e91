//! The placement engine.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collector::PointCollector;
use crate::coord::validate_position;
use crate::placement::offset;
use crate::placement::{PlacementConfig, PlacementError, PositionRegistry};
use crate::report::{PlacedPoint, Report};

/// Places reports at unique map coordinates.
///
/// Owns the session's [`PositionRegistry`] and the displacement RNG, and
/// forwards every placed point to the configured [`PointCollector`]. The
/// engine is single-owner (`&mut self`); wrap it in a
/// [`PlacementService`](crate::service::PlacementService) for concurrent
/// submission.
///
/// # Example
///
/// ```
/// use papermap::collector::VecCollector;
/// use papermap::coord::GeoPoint;
/// use papermap::placement::{PlacementConfig, PlacementEngine};
/// use papermap::report::{Report, ReportMeta};
///
/// let mut engine = PlacementEngine::new(PlacementConfig::default(), VecCollector::new());
///
/// let report = Report::new(GeoPoint::new(52.5, 13.4), ReportMeta::default());
/// let placed = engine.place(report)?;
/// assert!(!placed.displaced());
/// # Ok::<(), papermap::placement::PlacementError>(())
/// ```
pub struct PlacementEngine<C: PointCollector> {
    config: PlacementConfig,
    registry: PositionRegistry,
    collector: C,
    rng: StdRng,
}

impl<C: PointCollector> PlacementEngine<C> {
    /// Create an engine with OS-seeded randomness.
    pub fn new(config: PlacementConfig, collector: C) -> Self {
        Self::with_rng(config, collector, StdRng::from_os_rng())
    }

    /// Create an engine with a fixed seed.
    ///
    /// Identical input sequences then produce identical output sequences,
    /// displacements included.
    pub fn seeded(config: PlacementConfig, collector: C, seed: u64) -> Self {
        Self::with_rng(config, collector, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: PlacementConfig, collector: C, rng: StdRng) -> Self {
        Self {
            config,
            registry: PositionRegistry::new(),
            collector,
            rng,
        }
    }

    /// Place one report, displacing it if its exact coordinate is taken.
    ///
    /// The first report at a coordinate keeps it verbatim; later reports at
    /// the same coordinate are nudged northeast by a fresh random offset of
    /// up to `displacement_radius_m` metres per axis, re-drawn from the
    /// original coordinate until an unused key turns up.
    ///
    /// On success the registry gains exactly one entry and the collector
    /// receives the point. On error neither is touched.
    ///
    /// # Errors
    ///
    /// - [`PlacementError::InvalidCoordinate`] for out-of-range or
    ///   non-finite input.
    /// - [`PlacementError::Exhausted`] when `max_retries` fresh offsets all
    ///   landed on occupied keys.
    pub fn place(&mut self, report: Report) -> Result<PlacedPoint, PlacementError> {
        let origin = report.position;
        validate_position(origin.lat, origin.lon).map_err(|source| {
            PlacementError::InvalidCoordinate {
                lat: origin.lat,
                lon: origin.lon,
                source,
            }
        })?;

        let mut candidate = origin;
        let mut attempts: u32 = 0;
        while self.registry.contains(&candidate.key()) {
            if attempts >= self.config.max_retries {
                return Err(PlacementError::Exhausted { attempts });
            }
            attempts += 1;
            candidate = offset::displace(origin, self.config.displacement_radius_m, &mut self.rng);
        }

        let point = PlacedPoint::new(candidate, origin, report.meta);
        self.registry.insert(point.clone());
        self.collector.add_point(&point);
        Ok(point)
    }

    /// The session registry.
    pub fn registry(&self) -> &PositionRegistry {
        &self.registry
    }

    /// The downstream collector.
    pub fn collector(&self) -> &C {
        &self.collector
    }

    /// The engine configuration.
    pub fn config(&self) -> PlacementConfig {
        self.config
    }

    /// Tear down the engine, handing back the collector.
    pub fn into_collector(self) -> C {
        self.collector
    }
}
