//! Coordinate type definitions

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A geographic position in decimal degrees.
///
/// Plain WGS-84 latitude/longitude as reported by submitters. No projection
/// is applied; the placement engine works directly in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point from decimal degrees.
    ///
    /// No validation is performed here; see [`validate_position`] for the
    /// range checks applied at the engine boundary.
    ///
    /// [`validate_position`]: crate::coord::validate_position
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// The exact-match registry key for this position.
    #[inline]
    pub fn key(&self) -> PositionKey {
        PositionKey {
            lat_bits: self.lat.to_bits(),
            lon_bits: self.lon.to_bits(),
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Exact-match encoding of a coordinate pair.
///
/// Two reports occupy the same key if and only if their raw coordinates are
/// bit-identical. Any displacement, however small, yields a distinct key.
/// Collision detection is exact; visual de-overlapping of nearby but
/// non-identical points is the cluster renderer's concern, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    lat_bits: u64,
    lon_bits: u64,
}

impl fmt::Display for PositionKey {
    /// Format as `lat,lon` (e.g. `52.5,13.4`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            f64::from_bits(self.lat_bits),
            f64::from_bits(self.lon_bits)
        )
    }
}

/// Errors that can occur during coordinate validation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoordError {
    /// Latitude is non-finite or outside -90..=90
    #[error("invalid latitude {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),
    /// Longitude is non-finite or outside -180..=180
    #[error("invalid longitude {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),
}
