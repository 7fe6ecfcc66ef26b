//! Parameter structures shared by every front end.
//!
//! Interface layers (the CLI today) define their own argument types with
//! framework derives and convert into these plain structs, keeping core types
//! free of clap attributes:
//!
//! ```text
//! CLI Args (clap) ──into()──▶ Core Params ──▶ Session / Services
//! ```
//!
//! Validation that must happen before any storage or network call lives here
//! as `validate`/`TryFrom` implementations.

use serde::{Deserialize, Serialize};

use crate::{
    error::{ExploreoError, Result},
    models::ItineraryItem,
};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Default number of results requested from the place search API.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Upper bound accepted for a single place search.
pub const MAX_SEARCH_LIMIT: u32 = 500;

/// Parameters for operations requiring just a document id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentId {
    /// The id of the document to operate on
    pub id: String,
}

/// A new itinerary item as entered by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewItineraryItem {
    /// Title of the stop; must not be blank
    pub title: String,
    /// Optional note
    pub note: Option<String>,
    /// Day of the stop as epoch milliseconds
    pub date_epoch_millis: Option<i64>,
    /// Time of day as free text
    pub time_label: Option<String>,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
}

impl TryFrom<NewItineraryItem> for ItineraryItem {
    type Error = ExploreoError;

    fn try_from(params: NewItineraryItem) -> Result<Self> {
        if params.title.trim().is_empty() {
            return Err(ExploreoError::validation("title").with_reason("Title cannot be empty"));
        }
        if let Some(lat) = params.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(ExploreoError::validation("latitude")
                    .with_reason(format!("{lat} is outside -90..=90")));
            }
        }
        if let Some(lon) = params.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(ExploreoError::validation("longitude")
                    .with_reason(format!("{lon} is outside -180..=180")));
            }
        }

        Ok(ItineraryItem {
            title: params.title,
            note: params.note.unwrap_or_default(),
            date_epoch_millis: params.date_epoch_millis,
            time_label: params.time_label.filter(|t| !t.trim().is_empty()),
            latitude: params.latitude,
            longitude: params.longitude,
        })
    }
}

/// Query for the remote place search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPlaces {
    /// Comma-separated category list, e.g. `tourism.sights`
    pub categories: String,
    /// Area filter, e.g. `circle:18.42,-33.92,5000`
    pub filter: String,
    /// Maximum number of results
    pub limit: u32,
}

impl SearchPlaces {
    pub fn new(categories: impl Into<String>, filter: impl Into<String>) -> Self {
        Self {
            categories: categories.into(),
            filter: filter.into(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Builds a circular area filter around a point.
    pub fn circle_filter(latitude: f64, longitude: f64, radius_meters: u32) -> String {
        format!("circle:{longitude},{latitude},{radius_meters}")
    }

    /// Checks the query before any request is made.
    pub fn validate(&self) -> Result<()> {
        if self.categories.trim().is_empty() {
            return Err(ExploreoError::validation("categories")
                .with_reason("At least one category is required"));
        }
        if self.filter.trim().is_empty() {
            return Err(ExploreoError::validation("filter").with_reason("Filter cannot be empty"));
        }
        if self.limit == 0 || self.limit > MAX_SEARCH_LIMIT {
            return Err(ExploreoError::validation("limit")
                .with_reason(format!("Limit must be between 1 and {MAX_SEARCH_LIMIT}")));
        }
        Ok(())
    }
}

/// Email and password sign-in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignIn {
    pub email: String,
    pub password: String,
}

impl SignIn {
    /// Email must be non-blank and the password at least
    /// [`MIN_PASSWORD_LEN`] characters.
    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

/// Account registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignUp {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl SignUp {
    /// Same rules as [`SignIn::validate`] plus a non-blank display name.
    pub fn validate(&self) -> Result<()> {
        if self.display_name.trim().is_empty() {
            return Err(ExploreoError::validation("display_name")
                .with_reason("Display name cannot be empty"));
        }
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(ExploreoError::validation("email").with_reason("Email cannot be empty"));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ExploreoError::validation("password").with_reason(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
