//! Report and placed-point data types.
//!
//! A [`Report`] is an incoming user-submitted record: a position plus
//! metadata describing a paywalled-article request. The engine treats the
//! metadata as opaque; it is carried through to the [`PlacedPoint`]
//! unchanged and never inspected or validated.

use serde::{Deserialize, Serialize};

use crate::coord::GeoPoint;

/// Opaque display metadata attached to a report.
///
/// Everything here passes through the engine untouched. Empty strings are
/// normal; real feeds leave most fields blank for many reports.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Display name of the submitter
    #[serde(default)]
    pub name: String,
    /// Free-text story: why the article was needed
    #[serde(default)]
    pub story: String,
    /// Citation blob (title/authors/journal as one string)
    #[serde(default)]
    pub description: String,
    /// Citation reference, usually a DOI or ISBN
    #[serde(default)]
    pub doi: String,
    /// Submitter role (Student, Researcher, Librarian, ...)
    #[serde(default)]
    pub role: String,
    /// Submission date as free text; never parsed
    #[serde(default)]
    pub submitted: String,
    /// URL of the paywalled source
    #[serde(default)]
    pub url: String,
}

/// An incoming location-tagged report, not yet placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Position as submitted, prior to any displacement
    pub position: GeoPoint,
    /// Opaque pass-through metadata
    pub meta: ReportMeta,
}

impl Report {
    /// Create a report from a position and its metadata.
    pub fn new(position: GeoPoint, meta: ReportMeta) -> Self {
        Self { position, meta }
    }
}

/// A report assigned a guaranteed-unique map coordinate.
///
/// Immutable once created. Displacement never mutates the submitted
/// [`Report`]; it produces a new `PlacedPoint` carrying both the adjusted
/// position and the original one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPoint {
    position: GeoPoint,
    original: GeoPoint,
    meta: ReportMeta,
}

impl PlacedPoint {
    /// Create a placed point. Crate-internal: only the engine mints these,
    /// so a `PlacedPoint` is a proof its position key was free on insert.
    pub(crate) fn new(position: GeoPoint, original: GeoPoint, meta: ReportMeta) -> Self {
        Self {
            position,
            original,
            meta,
        }
    }

    /// Final map position, possibly adjusted from the submitted one.
    #[inline]
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    /// Position as originally submitted.
    #[inline]
    pub fn original(&self) -> GeoPoint {
        self.original
    }

    /// Pass-through metadata, unchanged from the report.
    #[inline]
    pub fn meta(&self) -> &ReportMeta {
        &self.meta
    }

    /// Whether the position was nudged away from the submitted coordinate.
    #[inline]
    pub fn displaced(&self) -> bool {
        self.position.key() != self.original.key()
    }
}
