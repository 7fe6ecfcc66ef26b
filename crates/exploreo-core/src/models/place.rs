//! Place model returned by the catalog and the remote place search.

use serde::{Deserialize, Deserializer, Serialize};

/// A named geographic point. Transient: never persisted as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Place {
    /// Display name of the place
    pub name: Option<String>,

    /// Longitude in decimal degrees
    #[serde(rename = "lon")]
    pub longitude: Option<f64>,

    /// Latitude in decimal degrees
    #[serde(rename = "lat")]
    pub latitude: Option<f64>,

    /// Country name, when the search API provides one
    pub country: Option<String>,

    /// City name, when the search API provides one
    pub city: Option<String>,

    /// Category tags such as `tourism.sights`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<String>,
}

impl Place {
    /// Creates a place with a name and coordinates and nothing else.
    pub fn named(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: Some(name.into()),
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Default::default()
        }
    }

    /// Adds a category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Name or empty string when the place is unnamed.
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
