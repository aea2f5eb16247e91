//! Placement engine configuration.

/// Default maximum real-world displacement radius in metres.
///
/// Colliding reports are nudged by less than this distance, far enough to
/// be visually distinguishable once the map zooms in, close enough to stay
/// geographically truthful.
pub const DEFAULT_DISPLACEMENT_RADIUS_M: f64 = 10.0;

/// Default cap on displacement attempts for a single report.
///
/// Each attempt draws a fresh random offset, so in practice the first
/// attempt finds a free key. The cap converts a degenerate configuration
/// (radius 0, or an adversarial feed) into a defined per-report failure
/// instead of an unbounded loop.
pub const DEFAULT_MAX_RETRIES: u32 = 100;

/// Tunables for the placement engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    /// Maximum real-world distance in metres a duplicate may be moved
    pub displacement_radius_m: f64,
    /// Maximum displacement attempts before a report is rejected
    pub max_retries: u32,
}

impl PlacementConfig {
    /// Configuration with a different displacement radius.
    pub fn with_displacement_radius_m(mut self, radius_m: f64) -> Self {
        self.displacement_radius_m = radius_m;
        self
    }

    /// Configuration with a different retry cap.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            displacement_radius_m: DEFAULT_DISPLACEMENT_RADIUS_M,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}
