//! Randomized, latitude-corrected displacement.
//!
//! Degrees are not metres: one degree of latitude is ~111,111 m everywhere,
//! but one degree of longitude shrinks by `cos(latitude)` away from the
//! equator. The maximum offsets below are scaled to a fixed real-world
//! distance per axis, so displacement behaves the same regardless of where
//! on the globe the report sits.
//!
//! Offsets are strictly non-negative, so repeated duplicates drift
//! northeast of the cluster center. The one-sided draw is the established
//! placement distribution and changing it would shift every existing map.

use rand::Rng;

use crate::coord::{GeoPoint, METERS_PER_DEGREE_LAT};

/// Maximum displacement in degrees for a target radius at a given latitude.
///
/// Returns `(max_lat_offset, max_lon_offset)`. The longitude component
/// grows toward the poles to compensate for meridian convergence.
#[inline]
pub fn max_offset_degrees(lat: f64, radius_m: f64) -> (f64, f64) {
    let max_lat_offset = radius_m / METERS_PER_DEGREE_LAT;
    let max_lon_offset = radius_m / (METERS_PER_DEGREE_LAT * lat.to_radians().cos());
    (max_lat_offset, max_lon_offset)
}

/// Draw one displaced candidate near `origin`.
///
/// Both offsets are drawn uniformly from `[0, max)`, so the candidate lies
/// in a northeast box whose sides span `radius_m` metres. The box diagonal
/// admits up to `radius_m * sqrt(2)` of great-circle displacement.
pub fn displace(origin: GeoPoint, radius_m: f64, rng: &mut impl Rng) -> GeoPoint {
    let (max_lat_offset, max_lon_offset) = max_offset_degrees(origin.lat, radius_m);

    let lat_offset = max_lat_offset * rng.random_range(0.0..1.0);
    let lon_offset = max_lon_offset * rng.random_range(0.0..1.0);

    GeoPoint::new(origin.lat + lat_offset, origin.lon + lon_offset)
}
