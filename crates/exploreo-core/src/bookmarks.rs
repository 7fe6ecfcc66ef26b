//! Bookmark service: the dedup policy in front of the bookmark store.

use std::sync::Arc;

use log::{info, warn};

use crate::{
    auth::AuthGate,
    dedup::{is_duplicate, Candidate},
    error::Result,
    models::{Bookmark, Place},
    store::BookmarkStore,
};

/// Result of [`BookmarkService::add_place`].
#[derive(Debug, Clone, PartialEq)]
pub enum BookmarkOutcome {
    Added(Bookmark),
    /// A bookmark with the same name or position already exists; nothing
    /// was written.
    Duplicate,
    Unauthenticated,
}

/// Bookmark operations for the signed-in user.
pub struct BookmarkService {
    store: Arc<dyn BookmarkStore>,
    auth: Arc<dyn AuthGate>,
}

impl BookmarkService {
    pub fn new(store: Arc<dyn BookmarkStore>, auth: Arc<dyn AuthGate>) -> Self {
        Self { store, auth }
    }

    /// Bookmarks `place` unless it duplicates an existing bookmark.
    ///
    /// Fetches the full bookmark list on every call.
    pub async fn add_place(&self, place: &Place) -> Result<BookmarkOutcome> {
        let Some(owner_id) = self.auth.current_user_id().filter(|id| !id.is_empty()) else {
            return Ok(BookmarkOutcome::Unauthenticated);
        };

        let existing = self.store.list(&owner_id).await?;
        if is_duplicate(&Candidate::from(place), &existing) {
            warn!("Skipping duplicate bookmark '{}'", place.name_or_default());
            return Ok(BookmarkOutcome::Duplicate);
        }

        let bookmark = self.store.add(&owner_id, place).await?;
        info!("Bookmarked '{}' as {}", bookmark.place_name, bookmark.id);
        Ok(BookmarkOutcome::Added(bookmark))
    }

    pub async fn list(&self) -> Result<Vec<Bookmark>> {
        self.store.list(&self.owner_id()).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<Bookmark>> {
        self.store.get(&self.owner_id(), id).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.store.remove(&self.owner_id(), id).await
    }

    fn owner_id(&self) -> String {
        self.auth.current_user_id().unwrap_or_default()
    }
}
