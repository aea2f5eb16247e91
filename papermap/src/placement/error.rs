//! Error types for report placement.
//!
//! Both variants are fatal for the report, not for the engine: the registry
//! is left unchanged and the engine keeps accepting further reports. The
//! engine never logs or swallows; every failure is returned to the caller,
//! who decides whether to drop, surface, or retry the report.

use thiserror::Error;

use crate::coord::CoordError;

/// Errors that can occur while placing a report.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlacementError {
    /// The submitted coordinate is outside valid ranges or non-finite
    #[error("rejected report at ({lat}, {lon}): {source}")]
    InvalidCoordinate {
        /// Latitude as submitted
        lat: f64,
        /// Longitude as submitted
        lon: f64,
        /// The failed range check
        source: CoordError,
    },

    /// The retry cap was reached without finding a free position key
    #[error("no free position found after {attempts} displacement attempts")]
    Exhausted {
        /// Number of displacement attempts made
        attempts: u32,
    },
}
