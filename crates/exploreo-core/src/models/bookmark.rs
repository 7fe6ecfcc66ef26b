//! Bookmark model definition.

use serde::{Deserialize, Serialize};

use super::Place;

/// A place saved by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    /// Identifier assigned by the store on creation
    pub id: String,

    /// Owning user id
    pub owner_id: String,

    /// Name of the bookmarked place
    pub place_name: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Category tags carried over from the place
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Bookmark {
    /// Builds a bookmark for `owner_id` from a place. Missing names become
    /// empty strings and missing coordinates become `0.0`.
    pub fn from_place(id: impl Into<String>, owner_id: impl Into<String>, place: &Place) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            place_name: place.name_or_default().to_string(),
            latitude: place.latitude.unwrap_or_default(),
            longitude: place.longitude.unwrap_or_default(),
            categories: place.categories.clone(),
        }
    }

    /// Plain-text form handed to a share target.
    pub fn share_text(&self) -> String {
        format!("{} ({}, {})", self.place_name, self.latitude, self.longitude)
    }
}
