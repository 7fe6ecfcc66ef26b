//! Plain-text itinerary sharing.
//!
//! One header line, then one line per item:
//!
//! ```text
//! My Exploreo itinerary:
//! 1. Beach (Sat, 15 Jun 10:00)
//! 2. Market: buy gifts
//! ```
//!
//! The parenthesised part holds the time, prefixed by the date when one is
//! set. A date without a time is not shown. The `: note` suffix appears only
//! for non-blank notes.

use std::fmt;

use jiff::tz::TimeZone;

use super::datetime::ShortDate;
use crate::models::ItineraryItem;

/// First line of every shared itinerary.
pub const SHARE_HEADER: &str = "My Exploreo itinerary:";

/// Share text for a list of itinerary items.
pub struct ItineraryShareText<'a> {
    pub items: &'a [ItineraryItem],
    pub time_zone: &'a TimeZone,
}

impl<'a> ItineraryShareText<'a> {
    pub fn new(items: &'a [ItineraryItem], time_zone: &'a TimeZone) -> Self {
        Self { items, time_zone }
    }

    /// The item lines without the header.
    pub fn body(&self) -> String {
        let mut out = String::new();
        for (index, item) in self.items.iter().enumerate() {
            out.push_str(&self.line(index + 1, item));
            out.push('\n');
        }
        out
    }

    fn line(&self, position: usize, item: &ItineraryItem) -> String {
        let date = item
            .date_epoch_millis
            .map(|ms| ShortDate::new(ms, self.time_zone).to_string())
            .filter(|d| !d.is_empty());
        let time = item
            .time_label
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        // The date is only shown alongside a time.
        let when = match (date, time) {
            (Some(d), Some(t)) => Some(format!("{d} {t}")),
            (None, Some(t)) => Some(t.to_string()),
            (_, None) => None,
        };

        let mut line = format!("{position}. {}", item.title);
        if let Some(when) = when {
            line.push_str(&format!(" ({when})"));
        }
        if !item.note.trim().is_empty() {
            line.push_str(&format!(": {}", item.note));
        }
        line
    }
}

impl<'a> fmt::Display for ItineraryShareText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SHARE_HEADER}")?;
        write!(f, "{}", self.body())
    }
}
