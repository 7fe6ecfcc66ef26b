//! Display implementations for domain models.
//!
//! All output is markdown for the terminal renderer: headers for documents,
//! bullet metadata, and compact numbered lines for itinerary items.

use std::fmt;

use super::datetime::{LocalDateTime, ShortDate};
use crate::{
    catalog::Region,
    models::{
        Bookmark, ImageQuality, Itinerary, ItineraryItem, MapDisplayMode, Place, Settings,
        UserProfile,
    },
};

impl fmt::Display for MapDisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name.as_deref().unwrap_or("(unnamed place)"))?;
        writeln!(f)?;
        if let (Some(lat), Some(lon)) = (self.latitude, self.longitude) {
            writeln!(f, "- Location: {lat}, {lon}")?;
        }
        let locality: Vec<&str> = [self.city.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !locality.is_empty() {
            writeln!(f, "- Area: {}", locality.join(", "))?;
        }
        if !self.categories.is_empty() {
            writeln!(f, "- Categories: {}", self.categories.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.place_name)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Location: {}, {}", self.latitude, self.longitude)?;
        if !self.categories.is_empty() {
            writeln!(f, "- Categories: {}", self.categories.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ItineraryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}**", self.title)?;
        let tz = jiff::tz::TimeZone::system();
        if let Some(ms) = self.date_epoch_millis {
            write!(f, " · {}", ShortDate::new(ms, &tz))?;
        }
        if let Some(time) = &self.time_label {
            write!(f, " · {time}")?;
        }
        if let Some((lat, lon)) = self.coordinates() {
            write!(f, " · {lat}, {lon}")?;
        }
        if !self.note.is_empty() {
            write!(f, "\n   {}", self.note)?;
        }
        Ok(())
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Itinerary {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- Saved: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Stops: {}", self.items.len())?;
        writeln!(f)?;
        for (index, item) in self.items.iter().enumerate() {
            writeln!(f, "{}. {item}", index + 1)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.display_name)?;
        writeln!(f)?;
        writeln!(f, "- Email: {}", self.email)?;
        writeln!(f, "- Language: {}", self.preferred_language)?;
        writeln!(f, "- User ID: {}", self.id)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Settings")?;
        writeln!(f)?;
        writeln!(f, "- dark-mode: {}", self.dark_mode)?;
        writeln!(f, "- language: {}", self.language)?;
        writeln!(f, "- map-mode: {}", self.map_display_mode)?;
        writeln!(f, "- traffic: {}", self.traffic_overlay)?;
        writeln!(f, "- image-quality: {}", self.image_quality)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        for attraction in self.attractions {
            writeln!(
                f,
                "- {} ({}, {})",
                attraction.name, attraction.latitude, attraction.longitude
            )?;
        }
        writeln!(f)
    }
}
