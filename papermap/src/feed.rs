//! Report feed decoding.
//!
//! Reports arrive as a JSON array of flat records:
//!
//! ```json
//! [
//!   {
//!     "lat": 52.5,
//!     "lon": 13.4,
//!     "name": "Joseph McArthur",
//!     "story": "Re-checking some work for my dissertation",
//!     "doi": "10.1016/j.neurobiolaging.2012.12.011",
//!     "role": "Student",
//!     "submitted": "Nov 18, 2013",
//!     "url": "http://www.sciencedirect.com/..."
//!   }
//! ]
//! ```
//!
//! Only `lat` and `lon` are required; every metadata field defaults to an
//! empty string. Decoding performs no coordinate validation. Range checks
//! stay with the engine, so a feed with one bad record still yields the
//! record for the engine to reject individually.

use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use crate::coord::GeoPoint;
use crate::report::{Report, ReportMeta};

/// Errors that can occur while decoding a report feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Reading the feed source failed
    #[error("failed to read report feed: {0}")]
    Io(#[from] std::io::Error),

    /// The feed is not a well-formed JSON array of reports
    #[error("malformed report feed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One flat feed record; the wire shape of a [`Report`].
#[derive(Debug, Deserialize)]
struct FeedRecord {
    lat: f64,
    lon: f64,
    #[serde(flatten)]
    meta: ReportMeta,
}

impl From<FeedRecord> for Report {
    fn from(record: FeedRecord) -> Self {
        Report::new(GeoPoint::new(record.lat, record.lon), record.meta)
    }
}

/// Decode a JSON report feed from a reader.
pub fn parse_reports(mut reader: impl Read) -> Result<Vec<Report>, FeedError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse_reports_str(&buf)
}

/// Decode a JSON report feed from a string.
pub fn parse_reports_str(feed: &str) -> Result<Vec<Report>, FeedError> {
    let records: Vec<FeedRecord> = serde_json::from_str(feed)?;
    Ok(records.into_iter().map(Report::from).collect())
}
