//! Keyed registry of placed points.
//!
//! Maps each occupied [`PositionKey`] to the [`PlacedPoint`] holding it.
//! The registry is scoped to one map session: constructed with the engine,
//! populated incrementally as reports arrive, discarded when the map view
//! is torn down. It is an owned object with an explicit lifecycle, never a
//! process-wide singleton.
//!
//! Single-owner, exclusive-write. Concurrent access goes through
//! [`PlacementService`](crate::service::PlacementService), which holds a
//! lock across the whole check-then-insert sequence.

use std::collections::HashMap;

use crate::coord::PositionKey;
use crate::report::PlacedPoint;

/// Mapping from position key to the placed point occupying it.
///
/// At most one point occupies any key at any time. The engine is the only
/// writer, so a successful lookup miss followed by an insert is race-free
/// within one `place` call.
#[derive(Debug, Default)]
pub struct PositionRegistry {
    points: HashMap<PositionKey, PlacedPoint>,
}

impl PositionRegistry {
    /// Create an empty registry for a new map session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a point already occupies this key.
    #[inline]
    pub fn contains(&self, key: &PositionKey) -> bool {
        self.points.contains_key(key)
    }

    /// The point occupying a key, if any.
    pub fn get(&self, key: &PositionKey) -> Option<&PlacedPoint> {
        self.points.get(key)
    }

    /// Number of placed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the registry holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All occupied keys (copied, unordered).
    pub fn keys(&self) -> Vec<PositionKey> {
        self.points.keys().copied().collect()
    }

    /// Iterate over the placed points (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &PlacedPoint> {
        self.points.values()
    }

    /// Drop every point, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Register a placed point under its own position key.
    ///
    /// Crate-internal: only the engine inserts, and only after it has
    /// proven the key free, which is what keeps the one-point-per-key
    /// invariant.
    pub(crate) fn insert(&mut self, point: PlacedPoint) {
        self.points.insert(point.position().key(), point);
    }
}
