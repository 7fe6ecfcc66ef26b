//! Duplicate-bookmark policy.
//!
//! A candidate is a duplicate of an existing bookmark when the names match
//! ignoring case, or when both coordinates lie strictly within
//! [`COORDINATE_TOLERANCE`] degrees of the existing ones.

use crate::models::{Bookmark, Place};

/// Maximum per-axis distance, in degrees, for two points to count as equal.
pub const COORDINATE_TOLERANCE: f64 = 1e-5;

/// The fields of a place the policy looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}

impl<'a> Candidate<'a> {
    pub fn new(name: &'a str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }
}

impl<'a> From<&'a Place> for Candidate<'a> {
    /// Uses the same defaults as [`Bookmark::from_place`], so the candidate
    /// describes the bookmark that would be written.
    fn from(place: &'a Place) -> Self {
        Self {
            name: place.name_or_default(),
            latitude: place.latitude.unwrap_or_default(),
            longitude: place.longitude.unwrap_or_default(),
        }
    }
}

/// Returns true when `candidate` duplicates any of `existing`.
pub fn is_duplicate(candidate: &Candidate<'_>, existing: &[Bookmark]) -> bool {
    existing.iter().any(|bookmark| matches(candidate, bookmark))
}

fn matches(candidate: &Candidate<'_>, bookmark: &Bookmark) -> bool {
    same_name(candidate.name, &bookmark.place_name)
        || ((bookmark.latitude - candidate.latitude).abs() < COORDINATE_TOLERANCE
            && (bookmark.longitude - candidate.longitude).abs() < COORDINATE_TOLERANCE)
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
