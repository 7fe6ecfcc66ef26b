//! Itinerary and itinerary item models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A single planned stop.
///
/// Items only exist inside an [`Itinerary`] document or the in-memory
/// session list. Field names on the wire match the stored documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItineraryItem {
    /// Short title of the stop
    pub title: String,

    /// Free-form note, empty when absent
    #[serde(default)]
    pub note: String,

    /// Calendar day of the stop as epoch milliseconds
    #[serde(rename = "dateMillis", default)]
    pub date_epoch_millis: Option<i64>,

    /// Time of day exactly as the user typed it (e.g. `10:00`)
    #[serde(rename = "time", default)]
    pub time_label: Option<String>,

    /// Optional latitude of the stop
    #[serde(rename = "lat", default)]
    pub latitude: Option<f64>,

    /// Optional longitude of the stop
    #[serde(rename = "lon", default)]
    pub longitude: Option<f64>,
}

impl ItineraryItem {
    /// Creates an item with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_date_millis(mut self, millis: i64) -> Self {
        self.date_epoch_millis = Some(millis);
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time_label = Some(time.into());
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Both coordinates, when the item has a location.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// A saved, immutable itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    /// Identifier assigned on save
    pub id: String,

    /// Owning user id
    pub owner_id: String,

    /// Ordered stops
    pub items: Vec<ItineraryItem>,

    /// Timestamp when the itinerary was saved (UTC)
    pub created_at: Timestamp,
}
