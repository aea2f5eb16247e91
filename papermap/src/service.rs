//! Thread-safe submission facade.
//!
//! [`PlacementEngine`] is single-owner. Reports can arrive from more than
//! one thread at once (a background load of historical data alongside live
//! submissions), and an unguarded engine would let two of them observe the
//! same "unused" key before either commits. The service closes that
//! check-then-act race by holding a lock across one full `place` call,
//! retries included.
//!
//! The engine itself never logs; the service is where outcomes become log
//! events, and every failure is still returned to the caller untouched.

use std::sync::Mutex;

use tracing::{debug, warn};

use crate::collector::PointCollector;
use crate::placement::{PlacementEngine, PlacementError};
use crate::report::{PlacedPoint, Report};

/// Shared handle for submitting reports from any thread.
///
/// # Example
///
/// ```
/// use papermap::collector::NullCollector;
/// use papermap::coord::GeoPoint;
/// use papermap::placement::{PlacementConfig, PlacementEngine};
/// use papermap::report::{Report, ReportMeta};
/// use papermap::service::PlacementService;
///
/// let engine = PlacementEngine::new(PlacementConfig::default(), NullCollector);
/// let service = PlacementService::new(engine);
///
/// let placed = service.submit(Report::new(GeoPoint::new(52.5, 13.4), ReportMeta::default()))?;
/// assert_eq!(service.placed_count(), 1);
/// # Ok::<(), papermap::placement::PlacementError>(())
/// ```
pub struct PlacementService<C: PointCollector> {
    engine: Mutex<PlacementEngine<C>>,
}

impl<C: PointCollector> PlacementService<C> {
    /// Wrap an engine for shared use.
    pub fn new(engine: PlacementEngine<C>) -> Self {
        Self {
            engine: Mutex::new(engine),
        }
    }

    /// Place one report; key-check and insert happen atomically.
    ///
    /// # Errors
    ///
    /// Propagates [`PlacementError`] from the engine; the failed report is
    /// not placed and the registry is unchanged.
    pub fn submit(&self, report: Report) -> Result<PlacedPoint, PlacementError> {
        let mut engine = self.engine.lock().expect("placement engine lock poisoned");
        match engine.place(report) {
            Ok(point) => {
                debug!(
                    position = %point.position(),
                    displaced = point.displaced(),
                    "report placed"
                );
                Ok(point)
            }
            Err(err) => {
                warn!(error = %err, "report not placed");
                Err(err)
            }
        }
    }

    /// Number of points placed so far this session.
    pub fn placed_count(&self) -> usize {
        self.engine
            .lock()
            .expect("placement engine lock poisoned")
            .registry()
            .len()
    }

    /// Tear down the service, handing back the engine.
    pub fn into_engine(self) -> PlacementEngine<C> {
        self.engine
            .into_inner()
            .expect("placement engine lock poisoned")
    }
}
