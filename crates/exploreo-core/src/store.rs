//! Store contracts for the per-user document collections.
//!
//! Each trait models one collection under `users/{uid}`. Implementations
//! perform one round trip per call and never retry. Callers receive the
//! owner id explicitly; an empty owner id means "nobody is signed in":
//!
//! - reads (`list`, `get`, `latest`, `list_all`) return empty/`None`
//! - writes (`add`, `create`) fail with [`ExploreoError::Unauthenticated`]
//! - `remove` is a no-op
//!
//! [`ExploreoError::Unauthenticated`]: crate::ExploreoError::Unauthenticated

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Bookmark, Itinerary, ItineraryItem, Place, UserProfile},
};

/// `users/{uid}/bookmarks/{bookmarkId}`
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Bookmarks of `owner_id` in creation order.
    async fn list(&self, owner_id: &str) -> Result<Vec<Bookmark>>;

    /// Stores a bookmark for `place` under a newly assigned id.
    async fn add(&self, owner_id: &str, place: &Place) -> Result<Bookmark>;

    /// Deletes a bookmark. Missing ids are not an error.
    async fn remove(&self, owner_id: &str, id: &str) -> Result<()>;

    /// Fetches a single bookmark.
    async fn get(&self, owner_id: &str, id: &str) -> Result<Option<Bookmark>>;
}

/// `users/{uid}/itineraries/{itineraryId}`
#[async_trait]
pub trait ItineraryStore: Send + Sync {
    /// Saves a new itinerary and returns its id. Existing itineraries are
    /// never updated.
    async fn create(&self, owner_id: &str, items: &[ItineraryItem]) -> Result<String>;

    /// The most recently created itinerary.
    async fn latest(&self, owner_id: &str) -> Result<Option<Itinerary>>;

    /// Every itinerary of `owner_id`, newest first.
    async fn list_all(&self, owner_id: &str) -> Result<Vec<Itinerary>>;
}

/// `users/{uid}`
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Creates or replaces the profile document.
    async fn upsert(&self, profile: &UserProfile) -> Result<()>;

    /// Fetches the profile for `owner_id`.
    async fn get(&self, owner_id: &str) -> Result<Option<UserProfile>>;
}
