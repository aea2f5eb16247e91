//! papermap - Geospatial report deduplication and placement
//!
//! This library prepares a stream of location-tagged reports (requests for
//! paywalled research articles) for map display. Reports often share an
//! exact coordinate (the same city-center default, the same submitter),
//! and a renderer would stack them invisibly on top of each other. The
//! placement engine guarantees every report a unique, stable,
//! geographically plausible position and hands it to an external collector
//! (the map's cluster layer), which owns all rendering.
//!
//! # High-Level API
//!
//! ```
//! use papermap::collector::VecCollector;
//! use papermap::coord::GeoPoint;
//! use papermap::placement::{PlacementConfig, PlacementEngine};
//! use papermap::report::{Report, ReportMeta};
//! use papermap::service::PlacementService;
//!
//! let engine = PlacementEngine::new(PlacementConfig::default(), VecCollector::new());
//! let service = PlacementService::new(engine);
//!
//! // Two reports at the identical coordinate: the second is nudged by up
//! // to ~10 m so both stay visible.
//! service.submit(Report::new(GeoPoint::new(52.5, 13.4), ReportMeta::default()))?;
//! let second = service.submit(Report::new(GeoPoint::new(52.5, 13.4), ReportMeta::default()))?;
//! assert!(second.displaced());
//! # Ok::<(), papermap::placement::PlacementError>(())
//! ```

pub mod collector;
pub mod coord;
pub mod feed;
pub mod logging;
pub mod placement;
pub mod report;
pub mod service;

/// Version of the papermap library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
