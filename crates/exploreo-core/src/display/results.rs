//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use url::Url;

use crate::{
    bookmarks::BookmarkOutcome,
    config::Config,
    links,
    models::{Bookmark, ImageQuality, ItineraryItem},
    session::{LoadOutcome, SaveOutcome},
};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use exploreo_core::{display::CreateResult, models::{Bookmark, Place}};
///
/// let place = Place::named("Blyde River Canyon", -24.5667, 30.8);
/// let result = CreateResult::new(Bookmark::from_place("b1", "u1", &place));
/// assert!(result.to_string().starts_with("Bookmarked 'Blyde River Canyon' (ID: b1)"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Bookmark> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Bookmarked '{}' (ID: {})",
            self.resource.place_name, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Bookmark> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed bookmark '{}' (ID: {})",
            self.resource.place_name, self.resource.id
        )
    }
}

/// Map links and imagery for one bookmark.
///
/// Image URLs are `None` when the API key they need is not configured.
pub struct BookmarkLinks {
    pub place_name: String,
    pub geo: String,
    pub navigation: String,
    pub thumbnail: Option<Url>,
    pub detail_map: Option<Url>,
    pub street_view: Option<Url>,
}

impl BookmarkLinks {
    pub fn new(bookmark: &Bookmark, config: &Config, quality: ImageQuality) -> Self {
        let (lat, lon) = (bookmark.latitude, bookmark.longitude);
        let static_map = |size: (u32, u32)| {
            config
                .require_geoapify_key()
                .ok()
                .map(|key| links::static_map_url(&config.static_map_url, key, lat, lon, size))
        };

        Self {
            place_name: bookmark.place_name.clone(),
            geo: links::geo_uri(lat, lon, &bookmark.place_name),
            navigation: links::navigation_uri(lat, lon, &bookmark.place_name),
            thumbnail: static_map(quality.thumbnail_size()),
            detail_map: static_map(quality.detail_size()),
            street_view: config.require_google_maps_key().ok().map(|key| {
                links::street_view_url(
                    &config.street_view_url,
                    key,
                    lat,
                    lon,
                    quality.street_view_size(),
                )
            }),
        }
    }
}

fn write_optional(f: &mut fmt::Formatter<'_>, label: &str, url: Option<&Url>) -> fmt::Result {
    match url {
        Some(url) => writeln!(f, "- {label}: {url}"),
        None => writeln!(f, "- {label}: (API key not configured)"),
    }
}

impl fmt::Display for BookmarkLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Links for {}", self.place_name)?;
        writeln!(f)?;
        writeln!(f, "- Map: {}", self.geo)?;
        writeln!(f, "- Navigate: {}", self.navigation)?;
        write_optional(f, "Thumbnail", self.thumbnail.as_ref())?;
        write_optional(f, "Detail map", self.detail_map.as_ref())?;
        write_optional(f, "Street view", self.street_view.as_ref())
    }
}

/// Map link and thumbnail for an itinerary stop with coordinates.
#[derive(Debug, Clone)]
pub struct StopLinks {
    pub geo: String,
    pub thumbnail: Option<Url>,
}

impl StopLinks {
    /// `None` when the stop has no coordinates.
    pub fn new(item: &ItineraryItem, config: &Config) -> Option<Self> {
        let (lat, lon) = item.coordinates()?;
        let thumbnail = config.require_geoapify_key().ok().map(|key| {
            links::static_map_url(
                &config.static_map_url,
                key,
                lat,
                lon,
                links::ITINERARY_THUMBNAIL_SIZE,
            )
        });
        Some(Self {
            geo: links::geo_uri(lat, lon, &item.title),
            thumbnail,
        })
    }
}

impl fmt::Display for StopLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   - Map: {}", self.geo)?;
        match &self.thumbnail {
            Some(url) => writeln!(f, "   - Thumbnail: {url}"),
            None => writeln!(f, "   - Thumbnail: (API key not configured)"),
        }
    }
}

impl fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveOutcome::Saved(id) => write!(f, "Itinerary saved (ID: {id})"),
            SaveOutcome::AlreadySaved(id) => write!(f, "Itinerary already saved (ID: {id})"),
            SaveOutcome::NothingToSave => write!(f, "Nothing to save"),
            SaveOutcome::Unauthenticated => write!(f, "Please sign in to save itineraries"),
        }
    }
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadOutcome::Loaded(count) => write!(f, "Loaded {count} items"),
            LoadOutcome::NoneSaved => write!(f, "No saved itinerary found"),
            LoadOutcome::Unauthenticated => write!(f, "Please sign in to load itineraries"),
        }
    }
}

impl fmt::Display for BookmarkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkOutcome::Added(bookmark) => write!(f, "{}", CreateResult::new(bookmark.clone())),
            BookmarkOutcome::Duplicate => write!(f, "Already bookmarked"),
            BookmarkOutcome::Unauthenticated => write!(f, "Please sign in to bookmark places"),
        }
    }
}
