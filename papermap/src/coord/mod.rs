//! Coordinate primitives
//!
//! Geographic position types, range validation, and the degree/metre
//! approximations the displacement math is built on.
//!
//! # Coordinate System
//!
//! - Latitude: degrees north (-90 to 90)
//! - Longitude: degrees east (-180 to 180)
//! - Distance: metres

mod types;

pub use types::{CoordError, GeoPoint, PositionKey, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Metres spanned by one degree of latitude.
///
/// One degree of longitude spans the same distance only at the equator and
/// shrinks by `cos(latitude)` toward the poles.
pub const METERS_PER_DEGREE_LAT: f64 = 111_111.0;

/// Earth's mean radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Validates that a latitude/longitude pair is a usable geographic position.
///
/// Rejects non-finite values and anything outside -90..=90 / -180..=180.
/// The range boundaries themselves are accepted.
#[inline]
pub fn validate_position(lat: f64, lon: f64) -> Result<(), CoordError> {
    // NaN fails both range comparisons, so non-finite values fall out of
    // the contains checks without special casing.
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }
    Ok(())
}

/// Calculate the great-circle distance between two positions in metres.
///
/// Uses the haversine formula for accuracy over the short distances the
/// placement engine cares about (tens of metres).
///
/// # Example
///
/// ```
/// use papermap::coord::{distance_m, GeoPoint};
///
/// // One degree of latitude is roughly 111 km
/// let d = distance_m(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
/// assert!((d - 111_195.0).abs() < 100.0);
/// ```
pub fn distance_m(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    // Haversine formula
    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}
